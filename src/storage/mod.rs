//! Item storage (process lifetime only)

pub mod store;

pub use store::ItemStore;
