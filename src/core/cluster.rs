//! Cluster data structures

use serde::{Deserialize, Serialize};

use super::ItemId;
use crate::config::PALETTE_SIZE;

/// A group of semantically similar items
///
/// Clusters are recomputed wholesale whenever the item set changes, so `id`
/// is only meaningful within one recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
	/// Centroid index this cluster was built from
	pub id: usize,
	/// Text of the member closest to the centroid
	pub label: String,
	/// Member ids, in store order
	pub member_ids: Vec<ItemId>,
	/// Average pairwise similarity within cluster
	pub cohesion: f32,
}

impl Cluster {
	/// Palette slot for the presentation layer
	pub fn color_index(&self) -> usize {
		self.id % PALETTE_SIZE
	}

	pub fn len(&self) -> usize {
		self.member_ids.len()
	}

	pub fn is_empty(&self) -> bool {
		self.member_ids.is_empty()
	}

	pub fn contains(&self, id: &ItemId) -> bool {
		self.member_ids.contains(id)
	}
}
