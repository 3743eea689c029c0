//! Core traits for the FX monitor.

mod notifier;
mod rate_source;

pub use notifier::Notifier;
pub use rate_source::RateSource;
