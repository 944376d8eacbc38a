//! # User Interface
//!
//! Colored terminal output and verbose-gated debug logging.

pub mod log;

pub use log::{debug, error, header, info, score, success, swatch, warn, Log};
