//! Memoizing embedder wrapper

use std::collections::HashMap;

use super::TextEmbedder;
use crate::core::Embedding;
use crate::error::Result;

/// Embeds each distinct text once and reuses the vector afterwards.
/// Failed embeddings are not cached.
#[derive(Debug)]
pub struct CachedEmbedder<E> {
	inner: E,
	cache: HashMap<String, Embedding>,
	hits: usize,
	misses: usize,
}

impl<E: TextEmbedder> CachedEmbedder<E> {
	pub fn new(inner: E) -> Self {
		Self {
			inner,
			cache: HashMap::new(),
			hits: 0,
			misses: 0,
		}
	}

	pub fn hits(&self) -> usize {
		self.hits
	}

	pub fn misses(&self) -> usize {
		self.misses
	}

	pub fn cached(&self) -> usize {
		self.cache.len()
	}

	pub fn inner(&self) -> &E {
		&self.inner
	}
}

impl<E: TextEmbedder> TextEmbedder for CachedEmbedder<E> {
	fn embed(&mut self, text: &str) -> Result<Embedding> {
		if let Some(vector) = self.cache.get(text) {
			self.hits += 1;
			return Ok(vector.clone());
		}

		let vector = self.inner.embed(text)?;
		self.misses += 1;
		self.cache.insert(text.to_string(), vector.clone());
		crate::ui::debug(&format!(
			"Embedded \"{}\" ({} cached, {} hits)",
			text,
			self.cache.len(),
			self.hits
		));
		Ok(vector)
	}

	fn dimension(&self) -> usize {
		self.inner.dimension()
	}
}
