//! Greedy similarity chain for display order
//!
//! Starts at the first item and keeps appending the unvisited item most
//! similar to the last one placed. O(n²) and not globally optimal; it only
//! has to put similar items next to each other.

use crate::core::{similarity, Item};

/// Display order as indices into `items` (a permutation)
pub fn order_indices(items: &[Item]) -> Vec<usize> {
	if items.len() <= 1 {
		return (0..items.len()).collect();
	}

	let mut unvisited: Vec<usize> = (1..items.len()).collect();
	let mut sorted = Vec::with_capacity(items.len());
	let mut current = 0;
	sorted.push(current);

	while !unvisited.is_empty() {
		let anchor = items[current].vector.as_slice();
		let mut best = 0;
		let mut max_sim = f32::NEG_INFINITY;

		for (pos, &idx) in unvisited.iter().enumerate() {
			let sim = similarity(anchor, items[idx].vector.as_slice());
			if sim > max_sim {
				max_sim = sim;
				best = pos;
			}
		}

		// `remove` keeps the remaining candidates in input order for tie-breaks
		current = unvisited.remove(best);
		sorted.push(current);
	}

	sorted
}

/// Items in display order
pub fn order(items: &[Item]) -> Vec<&Item> {
	order_indices(items).into_iter().map(|idx| &items[idx]).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn item(id: &str, vector: &[f32]) -> Item {
		Item::new(id, id, vector.to_vec())
	}

	fn ids(ordered: &[&Item]) -> Vec<String> {
		ordered.iter().map(|item| item.id.to_string()).collect()
	}

	#[test]
	fn empty_and_singleton_are_identity() {
		assert!(order(&[]).is_empty());
		let solo = [item("solo", &[1.0])];
		assert_eq!(ids(&order(&solo)), vec!["solo"]);
	}

	#[test]
	fn visits_similar_items_first() {
		let items = vec![
			item("apple", &[0.98, 0.2, 0.0]),
			item("sports car", &[0.05, 0.1, 0.99]),
			item("banana", &[0.9, 0.43, 0.05]),
		];
		assert_eq!(ids(&order(&items)), vec!["apple", "banana", "sports car"]);
	}

	#[test]
	fn follows_the_chain_not_the_start() {
		// b is closest to a, c is closer to b than d is
		let items = vec![
			item("a", &[1.0, 0.0]),
			item("d", &[-1.0, 0.1]),
			item("c", &[0.0, 1.0]),
			item("b", &[0.7, 0.7]),
		];
		assert_eq!(ids(&order(&items)), vec!["a", "b", "c", "d"]);
	}

	#[test]
	fn ties_pick_first_remaining() {
		let items = vec![
			item("start", &[1.0, 0.0]),
			item("twin-1", &[0.0, 1.0]),
			item("twin-2", &[0.0, 1.0]),
		];
		assert_eq!(ids(&order(&items)), vec!["start", "twin-1", "twin-2"]);
	}

	#[test]
	fn result_is_a_permutation() {
		let items: Vec<Item> = (0..17)
			.map(|i| item(&format!("i{i}"), &[(i as f32).sin(), (i as f32).cos()]))
			.collect();
		let mut indices = order_indices(&items);
		indices.sort_unstable();
		assert_eq!(indices, (0..17).collect::<Vec<_>>());
	}

	#[test]
	fn ordering_is_idempotent() {
		let items = vec![
			item("x", &[0.1, 0.9]),
			item("y", &[0.9, 0.1]),
			item("z", &[0.5, 0.5]),
		];
		assert_eq!(order_indices(&items), order_indices(&items));
	}
}
