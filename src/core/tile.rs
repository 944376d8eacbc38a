//! Deterministic tile sizing keyed by text content
//!
//! Each item gets a tile shape for the presentation grid. The shape is picked
//! from a fixed policy table using a 31-multiplier polynomial hash of the
//! text's UTF-16 code units (wrapped to `i32`), so the same text always gets
//! the same tile on every run.

use serde::{Deserialize, Serialize};

/// Texts at least this long (in UTF-16 units) always span two columns
const LONG_TEXT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileShape {
	/// 1 column x 1 row
	Single,
	/// 2 columns x 1 row
	Wide,
	/// 1 column x 2 rows
	Tall,
	/// 2 columns x 2 rows
	Large,
}

impl TileShape {
	/// Decide the shape of a tile from its text
	pub fn for_text(text: &str) -> Self {
		let selector = text_hash(text).unsigned_abs() % 100;
		let len = text.encode_utf16().count();

		if len >= LONG_TEXT {
			return if selector < 60 { TileShape::Wide } else { TileShape::Large };
		}

		match selector {
			0..=49 => TileShape::Single,
			50..=74 => TileShape::Wide,
			75..=89 => TileShape::Tall,
			_ => TileShape::Large,
		}
	}

	pub fn columns(self) -> usize {
		match self {
			TileShape::Single | TileShape::Tall => 1,
			TileShape::Wide | TileShape::Large => 2,
		}
	}

	pub fn rows(self) -> usize {
		match self {
			TileShape::Single | TileShape::Wide => 1,
			TileShape::Tall | TileShape::Large => 2,
		}
	}

	/// Grid cells occupied: 1, 2 or 4
	pub fn cells(self) -> usize {
		self.columns() * self.rows()
	}

	pub fn name(self) -> &'static str {
		match self {
			TileShape::Single => "single",
			TileShape::Wide => "wide",
			TileShape::Tall => "tall",
			TileShape::Large => "large",
		}
	}
}

impl std::fmt::Display for TileShape {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.name())
	}
}

/// Layout weight of a text (cells its tile occupies)
pub fn tile_weight(text: &str) -> usize {
	TileShape::for_text(text).cells()
}

/// `hash = hash * 31 + unit`, wrapping at 32 bits
fn text_hash(text: &str) -> i32 {
	text.encode_utf16().fold(0i32, |hash, unit| {
		i32::from(unit).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	// accumulator wraps at i32 on every step
	#[test]
	fn hash_wraps_to_signed_32_bit() {
		assert_eq!(text_hash(""), 0);
		assert_eq!(text_hash("apple"), 93_029_210);
		assert_eq!(text_hash("banana"), -1_396_355_227);
		assert_eq!(text_hash("Commuter train"), -805_160_800);
	}

	#[test]
	fn short_texts_cover_all_shapes() {
		assert_eq!(TileShape::for_text("ab"), TileShape::Single);
		assert_eq!(TileShape::for_text("cd"), TileShape::Wide);
		assert_eq!(TileShape::for_text("mn"), TileShape::Tall);
		assert_eq!(TileShape::for_text("gh"), TileShape::Large);
		assert_eq!(TileShape::for_text(""), TileShape::Single);
	}

	#[test]
	fn long_texts_are_wide_or_large() {
		assert_eq!(TileShape::for_text("Sleeping cat"), TileShape::Wide);
		assert_eq!(TileShape::for_text("Large truck"), TileShape::Large);
		assert_eq!(TileShape::for_text("abcdefghij"), TileShape::Wide);
		for text in ["Commuter train", "Convenient smartwatch", "Fresh banana"] {
			assert!(matches!(
				TileShape::for_text(text),
				TileShape::Wide | TileShape::Large
			));
		}
	}

	#[test]
	fn weights_follow_shape() {
		assert_eq!(tile_weight("ab"), 1);
		assert_eq!(tile_weight("cd"), 2);
		assert_eq!(tile_weight("mn"), 2);
		assert_eq!(tile_weight("gh"), 4);
	}

	#[test]
	fn sizing_is_deterministic() {
		for text in ["apple", "寿司", "sports car", "🍎 emoji"] {
			assert_eq!(TileShape::for_text(text), TileShape::for_text(text));
		}
	}
}
