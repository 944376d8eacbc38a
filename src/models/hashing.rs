//! Model-free embedder based on feature hashing
//!
//! Lowercased word tokens and their padded character trigrams are hashed
//! with xxh3 into a fixed number of signed buckets, then L2 normalized.
//! Texts sharing words or word fragments end up with similar directions.
//! There is no semantics beyond surface overlap.

use xxhash_rust::xxh3::xxh3_64;

use super::TextEmbedder;
use crate::config;
use crate::core::Embedding;
use crate::error::{Error, Result};

const WORD_WEIGHT: f32 = 1.0;
const TRIGRAM_WEIGHT: f32 = 0.5;

#[derive(Debug, Clone)]
pub struct HashEmbedder {
	dim: usize,
}

impl HashEmbedder {
	pub fn new(dim: usize) -> Result<Self> {
		if dim == 0 {
			return Err(Error::InvalidInput("embedding dimension must be positive".to_string()));
		}
		Ok(Self { dim })
	}

	/// Embedder sized from configuration (`--dim` / TESSERA_EMBED_DIM)
	pub fn from_config() -> Result<Self> {
		Self::new(config::embedding_dim())
	}

	fn add_feature(&self, vector: &mut [f32], feature: &str, weight: f32) {
		let hash = xxh3_64(feature.as_bytes());
		let bucket = (hash % self.dim as u64) as usize;
		let sign = if hash >> 63 == 1 { -1.0 } else { 1.0 };
		vector[bucket] += sign * weight;
	}
}

impl TextEmbedder for HashEmbedder {
	fn embed(&mut self, text: &str) -> Result<Embedding> {
		let mut vector = vec![0.0f32; self.dim];

		for token in tokens(text) {
			self.add_feature(&mut vector, &token, WORD_WEIGHT);

			let padded: Vec<char> = format!(" {} ", token).chars().collect();
			for window in padded.windows(3) {
				let gram: String = window.iter().collect();
				self.add_feature(&mut vector, &gram, TRIGRAM_WEIGHT);
			}
		}

		Ok(Embedding::new(vector))
	}

	fn dimension(&self) -> usize {
		self.dim
	}
}

fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
	text.split(|c: char| !c.is_alphanumeric())
		.filter(|token| !token.is_empty())
		.map(str::to_lowercase)
}
