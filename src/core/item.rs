//! Items and their identifiers

use rand::RngExt;
use serde::{Deserialize, Serialize};

use super::Embedding;

const ID_LEN: usize = 9;
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Opaque item token (9 base-36 characters)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
	/// Fresh random id. Uniqueness within a store is checked by the store.
	pub fn random() -> Self {
		let mut rng = rand::rng();
		let id = (0..ID_LEN)
			.map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
			.collect();
		Self(id)
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<&str> for ItemId {
	fn from(s: &str) -> Self {
		Self(s.to_string())
	}
}

impl From<String> for ItemId {
	fn from(s: String) -> Self {
		Self(s)
	}
}

impl std::fmt::Display for ItemId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// A text snippet with its embedding. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
	pub id: ItemId,
	pub text: String,
	pub vector: Embedding,
}

impl Item {
	pub fn new(id: impl Into<ItemId>, text: impl Into<String>, vector: impl Into<Embedding>) -> Self {
		Self {
			id: id.into(),
			text: text.into(),
			vector: vector.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn random_ids_are_base36_tokens() {
		let id = ItemId::random();
		assert_eq!(id.as_str().len(), ID_LEN);
		assert!(id.as_str().bytes().all(|b| ID_ALPHABET.contains(&b)));
	}

	#[test]
	fn random_ids_differ() {
		assert_ne!(ItemId::random(), ItemId::random());
	}
}
