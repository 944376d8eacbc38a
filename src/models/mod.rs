//! # Text Embedders
//!
//! The engine never loads a model itself. Anything that turns text into a
//! fixed-dimension vector implements [`TextEmbedder`] and is injected into
//! the [`Explorer`](crate::explorer::Explorer).

pub mod cache;
pub mod hashing;

pub use cache::CachedEmbedder;
pub use hashing::HashEmbedder;

use crate::core::Embedding;
use crate::error::Result;

/// Text to vector provider.
///
/// Implementations may be slow (model inference) and may fail; failures are
/// reported as [`Error::Embedding`](crate::error::Error::Embedding) and are
/// never retried by the engine.
pub trait TextEmbedder {
	fn embed(&mut self, text: &str) -> Result<Embedding>;

	/// Length of every vector returned by `embed`
	fn dimension(&self) -> usize;
}

impl<E: TextEmbedder + ?Sized> TextEmbedder for Box<E> {
	fn embed(&mut self, text: &str) -> Result<Embedding> {
		(**self).embed(text)
	}

	fn dimension(&self) -> usize {
		(**self).dimension()
	}
}
