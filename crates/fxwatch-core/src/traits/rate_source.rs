//! Rate source trait definition.

use crate::error::FetchError;
use crate::types::Reading;
use async_trait::async_trait;

/// Trait for exchange-rate quote sources.
///
/// A source performs one bounded network request per call and holds no
/// monitor state. Callers treat a [`FetchError`] as "skip this cycle":
/// history is not updated and alerts are not evaluated.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Fetch the current rate.
    async fn latest(&self) -> Result<Reading, FetchError>;

    /// Currency pair served by this source, e.g. `USD-BRL`.
    fn pair(&self) -> &str;

    /// Source name for logging.
    fn name(&self) -> &str;
}
