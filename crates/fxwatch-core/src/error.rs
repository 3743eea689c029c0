//! Error types for the FX monitor.

use crate::types::Direction;
use rust_decimal::Decimal;
use thiserror::Error;

/// Top-level monitor error.
#[derive(Error, Debug)]
pub enum WatchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Alert error: {0}")]
    Alert(#[from] AlertError),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors fetching a quote from the rate API.
///
/// All variants are recoverable: a failed fetch skips the current cycle
/// and never stops the monitor loop.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Unexpected status: {0}")]
    Status(String),

    #[error("Missing field in response: {0}")]
    MissingField(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Alert store operation errors.
#[derive(Error, Debug)]
pub enum AlertError {
    #[error("Alert for {value} ({direction}) already exists")]
    Duplicate { value: Decimal, direction: Direction },

    #[error("Alert index {index} out of range: valid range is 1..={count}")]
    IndexOutOfRange { index: usize, count: usize },
}

/// Alert persistence errors.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialize error: {0}")]
    Serialize(String),

    #[error("Deserialize error: {0}")]
    Deserialize(String),
}

/// Notification dispatch errors.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Result type alias for monitor operations.
pub type WatchResult<T> = Result<T, WatchError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sub_errors_convert_into_watch_error() {
        fn fails() -> WatchResult<()> {
            Err(FetchError::Connection("timed out".to_string()))?
        }

        let err = fails().unwrap_err();
        assert!(matches!(err, WatchError::Fetch(_)));
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn test_duplicate_message_names_threshold() {
        let err = WatchError::from(AlertError::Duplicate {
            value: dec!(5.20),
            direction: Direction::Above,
        });
        assert!(err.to_string().contains("5.20 (above)"));
    }
}
