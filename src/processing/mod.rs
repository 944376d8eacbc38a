//! Clustering, ordering, ranking and layout over an item snapshot

pub mod cluster;
pub mod layout;
pub mod order;
pub mod search;

pub use cluster::{cluster, KmeansFit};
pub use layout::{grid_shape, GridShape};
pub use order::{order, order_indices};
pub use search::{search, SearchHit};
