use thiserror::Error;

/// Errors returned by the engine.
#[derive(Debug, Error)]
pub enum Error {
	/// Vectors in one computation have different lengths.
	#[error("dimension mismatch: expected {expected}, found {found}")]
	DimensionMismatch {
		/// Dimension of the existing collection (or left operand).
		expected: usize,
		/// Dimension that was supplied.
		found: usize,
	},

	/// Input rejected before any state changed.
	#[error("invalid input: {0}")]
	InvalidInput(String),

	/// The embedding provider failed to produce a vector.
	#[error("embedding failed: {0}")]
	Embedding(String),
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
