//! Core domain types

pub mod cluster;
pub mod embedding;
pub mod item;
pub mod tile;

pub use cluster::Cluster;
pub use embedding::{similarity, try_similarity, Embedding};
pub use item::{Item, ItemId};
pub use tile::{tile_weight, TileShape};
