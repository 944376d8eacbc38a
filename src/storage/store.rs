//! In-memory item collection with derived views
//!
//! The store owns the items. Clusters, display order and grid shape are
//! derived from them and rebuilt from scratch after every successful
//! mutation; they are never patched incrementally.

use std::collections::HashMap;

use crate::core::{Cluster, Embedding, Item, ItemId};
use crate::error::{Error, Result};
use crate::processing::{self, GridShape, SearchHit};
use crate::ui;

#[derive(Debug, Default)]
pub struct ItemStore {
	items: Vec<Item>,
	clusters: Vec<Cluster>,
	ordering: Vec<ItemId>,
	grid: GridShape,
}

impl ItemStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add an item with a fresh id and recompute the derived views.
	///
	/// The vector must be non-empty and match the dimension of the items
	/// already stored.
	pub fn add(&mut self, text: impl Into<String>, vector: impl Into<Embedding>) -> Result<&Item> {
		let vector = vector.into();

		if vector.dim() == 0 {
			return Err(Error::InvalidInput("embedding vector is empty".to_string()));
		}
		if let Some(expected) = self.dim() {
			if vector.dim() != expected {
				return Err(Error::DimensionMismatch {
					expected,
					found: vector.dim(),
				});
			}
		}

		let id = self.fresh_id();
		self.items.push(Item {
			id,
			text: text.into(),
			vector,
		});
		self.recompute();

		let idx = self.items.len() - 1;
		Ok(&self.items[idx])
	}

	/// Remove an item by id. Unknown ids are a no-op and leave the views untouched.
	pub fn remove(&mut self, id: &ItemId) -> Option<Item> {
		let pos = self.items.iter().position(|item| &item.id == id)?;
		let removed = self.items.remove(pos);
		self.recompute();
		Some(removed)
	}

	/// Rebuild clusters, display order and grid shape from the current items
	pub fn recompute(&mut self) {
		self.clusters = processing::cluster(&self.items);
		self.ordering = processing::order_indices(&self.items)
			.into_iter()
			.map(|idx| self.items[idx].id.clone())
			.collect();
		self.grid = processing::grid_shape(&self.items);

		ui::debug(&format!(
			"Recomputed views: {} items, {} clusters, grid {}",
			self.items.len(),
			self.clusters.len(),
			self.grid
		));
	}

	/// Rank all items against a query vector (read only)
	pub fn search(&self, query: &[f32], top_k: usize) -> Result<Vec<SearchHit>> {
		processing::search(query, &self.items, top_k)
	}

	pub fn get(&self, id: &ItemId) -> Option<&Item> {
		self.items.iter().find(|item| &item.id == id)
	}

	pub fn contains(&self, id: &ItemId) -> bool {
		self.get(id).is_some()
	}

	/// Items in insertion order
	pub fn items(&self) -> &[Item] {
		&self.items
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Dimension shared by all stored vectors
	pub fn dim(&self) -> Option<usize> {
		self.items.first().map(|item| item.vector.dim())
	}

	pub fn clusters(&self) -> &[Cluster] {
		&self.clusters
	}

	pub fn cluster_of(&self, id: &ItemId) -> Option<&Cluster> {
		self.clusters.iter().find(|c| c.contains(id))
	}

	/// Item ids in display order
	pub fn ordering(&self) -> &[ItemId] {
		&self.ordering
	}

	/// Items in display order
	pub fn ordered_items(&self) -> Vec<&Item> {
		let by_id: HashMap<&ItemId, &Item> = self.items.iter().map(|item| (&item.id, item)).collect();
		self.ordering.iter().filter_map(|id| by_id.get(id).copied()).collect()
	}

	pub fn grid(&self) -> GridShape {
		self.grid
	}

	fn fresh_id(&self) -> ItemId {
		loop {
			let id = ItemId::random();
			if !self.contains(&id) {
				return id;
			}
		}
	}
}
