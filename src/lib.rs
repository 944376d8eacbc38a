//! # Tessera Library
//!
//! Semantic organization of short text snippets. Given one embedding vector
//! per snippet, the engine groups snippets into clusters, orders them so that
//! similar snippets sit next to each other, sizes a tile grid for them and
//! ranks them against a query.
//!
//! ```rust
//! use tessera::storage::ItemStore;
//!
//! let mut store = ItemStore::new();
//! store.add("apple", vec![0.98, 0.2, 0.0]).unwrap();
//! store.add("banana", vec![0.9, 0.43, 0.05]).unwrap();
//! store.add("sports car", vec![0.05, 0.1, 0.99]).unwrap();
//!
//! assert_eq!(store.clusters().len(), 2);
//! let texts: Vec<&str> = store.ordered_items().iter().map(|i| i.text.as_str()).collect();
//! assert_eq!(texts, ["apple", "banana", "sports car"]);
//!
//! let hits = store.search(&[0.95, 0.3, 0.02], 5).unwrap();
//! assert_eq!(hits.len(), 3);
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod explorer;
pub mod models;
pub mod processing;
pub mod storage;
pub mod ui;

pub use error::{Error, Result};
