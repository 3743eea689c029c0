//! Notification sink trait definition.

use crate::error::NotifyError;
use async_trait::async_trait;

/// Trait for outbound notification channels.
///
/// Dispatch is best-effort: a failed send is logged by the caller and never
/// rolls back alert removals that already happened.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a rendered message.
    async fn send(&self, text: &str) -> Result<(), NotifyError>;

    /// Channel name for logging.
    fn name(&self) -> &str;
}
