//! Exhaustive query ranking

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{similarity, Item, ItemId};
use crate::error::{Error, Result};

/// One ranked item for a query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
	pub item_id: ItemId,
	/// Cosine similarity [-1.0, 1.0]
	pub score: f32,
}

/// Rank `items` against `query`, best first, keeping at most `top_k` hits.
///
/// No score threshold is applied. Equal scores keep item order. The query
/// must have the same dimension as the items.
pub fn search(query: &[f32], items: &[Item], top_k: usize) -> Result<Vec<SearchHit>> {
	if let Some(first) = items.first() {
		if query.len() != first.vector.dim() {
			return Err(Error::DimensionMismatch {
				expected: first.vector.dim(),
				found: query.len(),
			});
		}
	}

	let mut hits: Vec<SearchHit> = items
		.par_iter()
		.map(|item| SearchHit {
			item_id: item.id.clone(),
			score: similarity(query, item.vector.as_slice()),
		})
		.collect();

	// stable: equal scores stay in item order
	hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
	hits.truncate(top_k);

	Ok(hits)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::DEFAULT_TOP_K;

	fn item(id: &str, vector: &[f32]) -> Item {
		Item::new(id, id, vector.to_vec())
	}

	fn ranked(hits: &[SearchHit]) -> Vec<&str> {
		hits.iter().map(|h| h.item_id.as_str()).collect()
	}

	#[test]
	fn no_items_no_hits() {
		assert!(search(&[1.0, 0.0], &[], DEFAULT_TOP_K).unwrap().is_empty());
	}

	#[test]
	fn fruit_query_ranks_fruit_first() {
		let items = vec![
			item("apple", &[0.98, 0.2, 0.0]),
			item("sports car", &[0.05, 0.1, 0.99]),
			item("banana", &[0.9, 0.43, 0.05]),
		];
		let fruit = [0.95, 0.3, 0.02];

		let hits = search(&fruit, &items, DEFAULT_TOP_K).unwrap();

		assert_eq!(hits.len(), 3);
		assert_eq!(hits[2].item_id.as_str(), "sports car");
		assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
	}

	#[test]
	fn truncates_to_top_k_and_keeps_negative_scores() {
		let items: Vec<Item> = (0..8)
			.map(|i| item(&format!("n{i}"), &[-1.0, i as f32 * 0.1]))
			.collect();

		let hits = search(&[1.0, 0.0], &items, 5).unwrap();

		assert_eq!(hits.len(), 5);
		assert!(hits.iter().all(|h| h.score < 0.0));
		assert!(search(&[1.0, 0.0], &items, 0).unwrap().is_empty());
	}

	#[test]
	fn equal_scores_keep_item_order() {
		let items = vec![
			item("first", &[0.0, 1.0]),
			item("best", &[1.0, 0.0]),
			item("second", &[0.0, 2.0]),
			item("third", &[0.0, 0.5]),
		];

		let hits = search(&[1.0, 0.0], &items, 10).unwrap();

		assert_eq!(ranked(&hits), vec!["best", "first", "second", "third"]);
	}

	#[test]
	fn rejects_query_of_wrong_dimension() {
		let items = vec![item("a", &[1.0, 0.0, 0.0])];
		let err = search(&[1.0, 0.0], &items, 5).unwrap_err();
		assert!(matches!(err, Error::DimensionMismatch { expected: 3, found: 2 }));
	}
}
