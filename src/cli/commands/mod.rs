//! CLI command implementations.

pub mod alert;
pub mod quote;
pub mod status;
pub mod validate;
pub mod watch;
