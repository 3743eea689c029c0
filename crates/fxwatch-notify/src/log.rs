//! Log-only notifier for dry runs.

use async_trait::async_trait;
use fxwatch_core::error::NotifyError;
use fxwatch_core::traits::Notifier;
use tracing::info;

/// Notifier that writes messages to the log instead of an external channel.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        info!("notification: {}", text);
        Ok(())
    }

    fn name(&self) -> &str {
        "Log"
    }
}
