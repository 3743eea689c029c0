//! Persistent alert storage and threshold evaluation.

mod evaluator;
mod store;

pub use store::AlertStore;
