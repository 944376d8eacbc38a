//! Embedding vectors and cosine similarity

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Embedding(Vec<f32>);

impl Embedding {
	/// Create normalized embedding from raw data
	pub fn new(data: Vec<f32>) -> Self {
		Self(normalize(&data))
	}

	/// Wrap data as-is (provider output is assumed normalized already)
	pub fn raw(data: Vec<f32>) -> Self {
		Self(data)
	}

	pub fn as_slice(&self) -> &[f32] {
		&self.0
	}

	pub fn dim(&self) -> usize {
		self.0.len()
	}

	pub fn into_inner(self) -> Vec<f32> {
		self.0
	}

	/// Cosine similarity [-1.0, 1.0]
	pub fn similarity(&self, other: &Self) -> f32 {
		similarity(&self.0, &other.0)
	}
}

impl From<Vec<f32>> for Embedding {
	fn from(data: Vec<f32>) -> Self {
		Self::raw(data)
	}
}

/// Cosine similarity of two equal-length vectors.
///
/// Returns exactly `0.0` when either vector has zero norm. Lengths must
/// match; use [`try_similarity`] when they come from outside the engine.
pub fn similarity(a: &[f32], b: &[f32]) -> f32 {
	debug_assert_eq!(a.len(), b.len());

	let mut dot = 0.0f64;
	let mut norm_a = 0.0f64;
	let mut norm_b = 0.0f64;
	for (&x, &y) in a.iter().zip(b.iter()) {
		let (x, y) = (f64::from(x), f64::from(y));
		dot += x * y;
		norm_a += x * x;
		norm_b += y * y;
	}

	if norm_a == 0.0 || norm_b == 0.0 {
		return 0.0;
	}

	(dot / (norm_a.sqrt() * norm_b.sqrt())) as f32
}

/// [`similarity`] with a length check instead of a debug assertion.
pub fn try_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
	if a.len() != b.len() {
		return Err(Error::DimensionMismatch {
			expected: a.len(),
			found: b.len(),
		});
	}
	Ok(similarity(a, b))
}

fn normalize(v: &[f32]) -> Vec<f32> {
	let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
	if norm > 0.0 {
		v.iter().map(|x| x / norm).collect()
	} else {
		v.to_vec()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPS: f32 = 1e-6;

	#[test]
	fn self_similarity_is_one() {
		let v = [0.3, -1.2, 4.0, 0.0];
		assert!((similarity(&v, &v) - 1.0).abs() < EPS);
	}

	#[test]
	fn zero_vector_scores_zero() {
		let v = [0.3, -1.2, 4.0];
		let zero = [0.0; 3];
		assert_eq!(similarity(&v, &zero), 0.0);
		assert_eq!(similarity(&zero, &v), 0.0);
		assert_eq!(similarity(&zero, &zero), 0.0);
	}

	#[test]
	fn similarity_is_symmetric_and_bounded() {
		let a = [1.0, 2.0, 3.0];
		let b = [-2.0, 0.5, 1.0];
		assert_eq!(similarity(&a, &b), similarity(&b, &a));
		assert!((-1.0..=1.0).contains(&similarity(&a, &b)));
		assert!((similarity(&a, &[-1.0, -2.0, -3.0]) + 1.0).abs() < EPS);
	}

	#[test]
	fn does_not_assume_unit_norm() {
		assert!((similarity(&[10.0, 0.0], &[0.5, 0.0]) - 1.0).abs() < EPS);
	}

	#[test]
	fn mismatched_lengths_are_rejected() {
		let err = try_similarity(&[1.0, 0.0], &[1.0]).unwrap_err();
		assert!(matches!(err, Error::DimensionMismatch { expected: 2, found: 1 }));
	}

	#[test]
	fn new_normalizes() {
		let e = Embedding::new(vec![3.0, 4.0]);
		assert!((e.as_slice()[0] - 0.6).abs() < EPS);
		assert!((e.as_slice()[1] - 0.8).abs() < EPS);
		assert_eq!(Embedding::new(vec![0.0, 0.0]).as_slice(), &[0.0, 0.0]);
	}
}
