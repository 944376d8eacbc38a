//! Centroid clustering with farthest-point seeding
//!
//! k-means over cosine similarity: `k = clamp(n / 4, 2, 8)`, deterministic
//! farthest-point seeds starting from the first item, then up to
//! [`MAX_ITERATIONS`] Lloyd rounds. Every comparison is a cosine, so seeding
//! uses `1 - cosine` as distance and assignment picks the maximum cosine.
//! All ties go to the first candidate in iteration order.

use rayon::prelude::*;

use crate::config::{cluster_count, MAX_ITERATIONS};
use crate::core::{similarity, Cluster, Item};
use crate::ui;

/// Result of the Lloyd iterations, before clusters are emitted
#[derive(Debug, Clone)]
pub struct KmeansFit {
	/// Centroid index per item, in item order
	pub assignments: Vec<usize>,
	pub centroids: Vec<Vec<f32>>,
	/// Rounds actually run
	pub iterations: usize,
}

/// Partition items into labelled clusters.
///
/// Returns an empty list for fewer than two items. Centroids that end up
/// without members are dropped, so cluster ids may have gaps.
pub fn cluster(items: &[Item]) -> Vec<Cluster> {
	let Some(fit) = fit(items) else {
		return Vec::new();
	};

	let clusters: Vec<Cluster> = (0..fit.centroids.len())
		.into_par_iter()
		.filter_map(|c| build_cluster(c, items, &fit))
		.collect();

	ui::debug(&format!(
		"Clustered {} items into {} groups (k={}, {} iterations)",
		items.len(),
		clusters.len(),
		fit.centroids.len(),
		fit.iterations
	));

	clusters
}

/// Run seeding and Lloyd iterations. `None` when there are fewer than two items.
pub fn fit(items: &[Item]) -> Option<KmeansFit> {
	if items.len() < 2 {
		return None;
	}

	let k = cluster_count(items.len());
	let mut centroids = seed_centroids(items, k);
	let mut assignments = vec![usize::MAX; items.len()];
	let mut iterations = 0;

	for _ in 0..MAX_ITERATIONS {
		iterations += 1;

		let next: Vec<usize> = items
			.par_iter()
			.map(|item| nearest_centroid(item.vector.as_slice(), &centroids))
			.collect();

		let changed = next != assignments;
		assignments = next;
		centroids = update_centroids(items, &assignments, &centroids);

		if !changed {
			break;
		}
	}

	Some(KmeansFit {
		assignments,
		centroids,
		iterations,
	})
}

/// Greedy farthest-point seeding, first centroid is the first item
fn seed_centroids(items: &[Item], k: usize) -> Vec<Vec<f32>> {
	let mut centroids: Vec<Vec<f32>> = Vec::with_capacity(k);
	centroids.push(items[0].vector.as_slice().to_vec());

	while centroids.len() < k {
		let mut farthest = 0;
		let mut max_dist = f32::NEG_INFINITY;

		for (idx, item) in items.iter().enumerate() {
			let min_dist = centroids
				.iter()
				.map(|c| 1.0 - similarity(item.vector.as_slice(), c))
				.fold(f32::INFINITY, f32::min);

			if min_dist > max_dist {
				max_dist = min_dist;
				farthest = idx;
			}
		}

		centroids.push(items[farthest].vector.as_slice().to_vec());
	}

	centroids
}

/// Index of the most similar centroid (lowest index wins ties)
fn nearest_centroid(vector: &[f32], centroids: &[Vec<f32>]) -> usize {
	let mut best = 0;
	let mut best_sim = f32::NEG_INFINITY;

	for (c, centroid) in centroids.iter().enumerate() {
		let sim = similarity(vector, centroid);
		if sim > best_sim {
			best_sim = sim;
			best = c;
		}
	}

	best
}

/// Component-wise mean per centroid; memberless centroids keep their value
fn update_centroids(items: &[Item], assignments: &[usize], previous: &[Vec<f32>]) -> Vec<Vec<f32>> {
	let dim = previous.first().map_or(0, Vec::len);
	let mut sums = vec![vec![0.0f32; dim]; previous.len()];
	let mut counts = vec![0usize; previous.len()];

	for (item, &c) in items.iter().zip(assignments) {
		counts[c] += 1;
		for (sum, &val) in sums[c].iter_mut().zip(item.vector.as_slice()) {
			*sum += val;
		}
	}

	sums.into_iter()
		.zip(counts)
		.zip(previous)
		.map(|((mut sum, count), prev)| {
			if count == 0 {
				return prev.clone();
			}
			let n = count as f32;
			for val in &mut sum {
				*val /= n;
			}
			sum
		})
		.collect()
}

fn build_cluster(c: usize, items: &[Item], fit: &KmeansFit) -> Option<Cluster> {
	let members: Vec<&Item> = items
		.iter()
		.zip(&fit.assignments)
		.filter(|(_, &a)| a == c)
		.map(|(item, _)| item)
		.collect();

	if members.is_empty() {
		return None;
	}

	let centroid = &fit.centroids[c];
	let representative = find_representative(&members, centroid);

	Some(Cluster {
		id: c,
		label: representative.text.clone(),
		member_ids: members.iter().map(|item| item.id.clone()).collect(),
		cohesion: compute_cohesion(&members),
	})
}

/// Member most similar to the centroid (first wins ties)
fn find_representative<'a>(members: &[&'a Item], centroid: &[f32]) -> &'a Item {
	let mut best = members[0];
	let mut best_sim = f32::NEG_INFINITY;

	for &item in members {
		let sim = similarity(item.vector.as_slice(), centroid);
		if sim > best_sim {
			best_sim = sim;
			best = item;
		}
	}

	best
}

/// Compute average pairwise similarity within cluster
fn compute_cohesion(members: &[&Item]) -> f32 {
	if members.len() < 2 {
		return 1.0;
	}

	let mut total_similarity = 0.0;
	let mut count = 0;

	for i in 0..members.len() {
		for j in (i + 1)..members.len() {
			total_similarity += members[i].vector.similarity(&members[j].vector);
			count += 1;
		}
	}

	total_similarity / count as f32
}
