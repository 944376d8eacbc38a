//! Engine configuration and constants

use std::sync::OnceLock;

static CUSTOM_EMBED_DIM: OnceLock<usize> = OnceLock::new();

// === Clustering ===
pub const MIN_CLUSTERS: usize = 2;
pub const MAX_CLUSTERS: usize = 8;
/// One cluster per this many items, before clamping
pub const ITEMS_PER_CLUSTER: usize = 4;
pub const MAX_ITERATIONS: usize = 15;

// === Search Defaults ===
pub const DEFAULT_TOP_K: usize = 5;

// === Layout ===
pub const DEFAULT_GRID: (usize, usize) = (4, 4);
pub const MIN_GRID_COLUMNS: usize = 4;
pub const GRID_ASPECT: f64 = 1.5;
pub const ROW_HEADROOM: f64 = 0.25;

// === Presentation ===
pub const PALETTE_SIZE: usize = 8;

// === Hash Embedder ===
pub const DEFAULT_EMBEDDING_DIM: usize = 256;
pub const EMBED_DIM_ENV: &str = "TESSERA_EMBED_DIM";

/// Starter dataset loaded by `Explorer::seed_defaults`
pub const DEFAULT_SNIPPETS: &[&str] = &[
	"Delicious red apple",
	"Fresh banana",
	"Sweet strawberry",
	"Sour lemon",
	"Fast sports car",
	"Convenient bicycle",
	"Large truck",
	"Commuter train",
	"Cute puppy",
	"Sleeping cat",
	"Bird flying in the sky",
	"Swimming fish",
	"The latest smartphone",
	"High performance computer",
	"Convenient smartwatch",
	"AI technology is evolving",
	"Programming is fun",
	"Learning data science",
];

pub fn set_embedding_dim(dim: usize) {
	let _ = CUSTOM_EMBED_DIM.set(dim);
}

/// Hash embedder dimension (CLI override, then TESSERA_EMBED_DIM, then default)
pub fn embedding_dim() -> usize {
	if let Some(dim) = CUSTOM_EMBED_DIM.get() {
		return *dim;
	}

	if let Ok(value) = std::env::var(EMBED_DIM_ENV) {
		match value.trim().parse::<usize>() {
			Ok(dim) if dim > 0 => {
				crate::ui::debug(&format!("Using {}={}", EMBED_DIM_ENV, dim));
				return dim;
			}
			_ => crate::ui::warn(&format!(
				"Ignoring invalid {}: \"{}\"",
				EMBED_DIM_ENV, value
			)),
		}
	}

	DEFAULT_EMBEDDING_DIM
}

/// Cluster count for a collection of `n` items
pub fn cluster_count(n: usize) -> usize {
	(n / ITEMS_PER_CLUSTER).clamp(MIN_CLUSTERS, MAX_CLUSTERS)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cluster_count_is_clamped() {
		assert_eq!(cluster_count(2), 2);
		assert_eq!(cluster_count(3), 2);
		assert_eq!(cluster_count(12), 3);
		assert_eq!(cluster_count(18), 4);
		assert_eq!(cluster_count(100), 8);
	}
}
