//! Core data types for the FX monitor.

mod alert;
mod reading;
mod trend;

pub use alert::{Alert, Direction};
pub use reading::{RateHistory, Reading, HISTORY_CAPACITY};
pub use trend::Trend;
