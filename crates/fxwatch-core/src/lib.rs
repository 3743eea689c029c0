//! Core types and traits for the FX monitor.
//!
//! This crate provides the foundational building blocks including:
//! - Rate data types (Reading, RateHistory)
//! - Alert types and the trend classifier
//! - Core traits for quote sources and notification sinks

pub mod error;
pub mod traits;
pub mod types;

pub use error::{WatchError, WatchResult};
pub use traits::*;
pub use types::*;
