//! Interactive session over an item store
//!
//! `Explorer` is what a host application drives: it embeds submitted text
//! through an injected [`TextEmbedder`], keeps the current query and its
//! hits, and renders the per-tile presentation view.

use serde::Serialize;

use crate::config::{DEFAULT_SNIPPETS, DEFAULT_TOP_K};
use crate::core::{Cluster, Embedding, ItemId, TileShape};
use crate::error::{Error, Result};
use crate::models::TextEmbedder;
use crate::processing::{GridShape, SearchHit};
use crate::storage::ItemStore;
use crate::ui;

/// One tile of the presentation grid, in display order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tile {
	pub id: ItemId,
	pub text: String,
	pub shape: TileShape,
	/// Palette slot of the item's cluster, `None` when nothing is clustered
	pub color_index: Option<usize>,
	/// Search score when the item is among the current hits
	pub score: Option<f32>,
	/// A query is active and this item is not a hit
	pub dimmed: bool,
}

struct ActiveQuery {
	text: String,
	vector: Embedding,
}

pub struct Explorer<E> {
	store: ItemStore,
	embedder: E,
	top_k: usize,
	query: Option<ActiveQuery>,
	hits: Vec<SearchHit>,
}

impl<E: TextEmbedder> Explorer<E> {
	pub fn new(embedder: E) -> Self {
		Self {
			store: ItemStore::new(),
			embedder,
			top_k: DEFAULT_TOP_K,
			query: None,
			hits: Vec::new(),
		}
	}

	pub fn with_top_k(mut self, top_k: usize) -> Self {
		self.top_k = top_k;
		self
	}

	/// Embed and add a snippet. Blank text is rejected; on embedding
	/// failure the store is left unchanged.
	pub fn add_text(&mut self, text: &str) -> Result<ItemId> {
		let text = text.trim();
		if text.is_empty() {
			return Err(Error::InvalidInput("text is blank".to_string()));
		}

		let vector = self.embedder.embed(text)?;
		let id = self.store.add(text, vector)?.id.clone();
		self.rerank();

		Ok(id)
	}

	/// Load the built-in starter snippets
	pub fn seed_defaults(&mut self) -> Result<Vec<ItemId>> {
		DEFAULT_SNIPPETS.iter().map(|text| self.add_text(text)).collect()
	}

	/// Remove an item. Removing a known item also clears the active query.
	pub fn remove(&mut self, id: &ItemId) -> bool {
		if self.store.remove(id).is_none() {
			return false;
		}
		self.clear_query();
		true
	}

	/// Embed the query once and rank every item against it.
	///
	/// A blank query, or an empty store, clears the hits. On failure the
	/// previous query and its hits are kept.
	pub fn set_query(&mut self, query: &str) -> Result<&[SearchHit]> {
		let query = query.trim();
		if query.is_empty() || self.store.is_empty() {
			self.clear_query();
			return Ok(self.hits.as_slice());
		}

		let vector = self.embedder.embed(query)?;
		let hits = self.store.search(vector.as_slice(), self.top_k)?;
		self.query = Some(ActiveQuery {
			text: query.to_string(),
			vector,
		});
		self.hits = hits;

		ui::debug(&format!("Query \"{}\": {} hits", query, self.hits.len()));
		Ok(self.hits.as_slice())
	}

	pub fn clear_query(&mut self) {
		self.query = None;
		self.hits.clear();
	}

	/// Refresh hits for the active query after the item set changed.
	/// A query that no longer ranks is dropped; the mutation itself stands.
	fn rerank(&mut self) {
		let Some(q) = &self.query else {
			return;
		};

		match self.store.search(q.vector.as_slice(), self.top_k) {
			Ok(hits) => self.hits = hits,
			Err(e) => {
				ui::warn(&format!("Search cleared: {}", e));
				self.clear_query();
			}
		}
	}

	pub fn query(&self) -> Option<&str> {
		self.query.as_ref().map(|q| q.text.as_str())
	}

	pub fn hits(&self) -> &[SearchHit] {
		&self.hits
	}

	pub fn store(&self) -> &ItemStore {
		&self.store
	}

	pub fn clusters(&self) -> &[Cluster] {
		self.store.clusters()
	}

	pub fn grid(&self) -> GridShape {
		self.store.grid()
	}

	pub fn embedder(&self) -> &E {
		&self.embedder
	}

	/// Presentation view: every item in display order
	pub fn tiles(&self) -> Vec<Tile> {
		let searching = self.query.is_some();

		self.store
			.ordered_items()
			.into_iter()
			.map(|item| {
				let score = self
					.hits
					.iter()
					.find(|hit| hit.item_id == item.id)
					.map(|hit| hit.score);

				Tile {
					id: item.id.clone(),
					text: item.text.clone(),
					shape: TileShape::for_text(&item.text),
					color_index: self.store.cluster_of(&item.id).map(Cluster::color_index),
					score,
					dimmed: searching && score.is_none(),
				}
			})
			.collect()
	}
}
