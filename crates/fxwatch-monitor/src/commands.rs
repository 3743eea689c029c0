//! The six command entry points exposed to transport layers.
//!
//! Each handler returns a typed result; turning a rejection into a
//! user-facing message is the transport's job.

use crate::state::SharedState;
use fxwatch_core::error::{AlertError, FetchError};
use fxwatch_core::traits::RateSource;
use fxwatch_core::types::{Alert, Direction, Reading, Trend};
use rust_decimal::Decimal;
use tracing::info;

/// Result of an interactive quote request.
#[derive(Debug, Clone)]
pub struct QuoteReport {
    pub reading: Reading,
    pub trend: Trend,
}

/// Command summary shown to users.
pub fn help_text() -> &'static str {
    "🤖 USD-BRL rate monitor\n\n\
     Available commands:\n\n\
     💰 quote - current rate with trend\n\
     🔔 alert add <value> <above|below> - arm a one-shot alert\n\
     📋 alert list - armed alerts\n\
     🗑️ alert remove <number> - disarm by list number\n\
     ❌ alert clear - disarm everything\n\n\
     The monitor also notifies automatically every 30 minutes when the\n\
     rate moves significantly or an alert fires."
}

/// Fetch the current rate, record it and classify the trend.
pub async fn current_quote(
    source: &dyn RateSource,
    state: &SharedState,
) -> Result<QuoteReport, FetchError> {
    let reading = source.latest().await?;

    let mut state = state.lock().unwrap();
    let previous = state.history.latest().map(|r| r.value);
    state.record(reading);

    Ok(QuoteReport {
        reading,
        trend: Trend::classify(reading.value, previous),
    })
}

/// Arm a new alert.
pub fn create_alert(
    state: &SharedState,
    value: Decimal,
    direction: Direction,
) -> Result<Alert, AlertError> {
    let alert = state.lock().unwrap().alerts.add(value, direction)?;
    info!("alert armed: {}", alert);
    Ok(alert)
}

/// Armed alerts in display order.
pub fn list_alerts(state: &SharedState) -> Vec<Alert> {
    state.lock().unwrap().alerts.list().to_vec()
}

/// Disarm the alert at the 1-based display index.
pub fn remove_alert(state: &SharedState, index: usize) -> Result<Alert, AlertError> {
    let alert = state.lock().unwrap().alerts.remove_at(index)?;
    info!("alert disarmed: {}", alert);
    Ok(alert)
}

/// Disarm every alert, returning how many were removed.
pub fn clear_alerts(state: &SharedState) -> usize {
    let removed = state.lock().unwrap().alerts.clear();
    if removed > 0 {
        info!("cleared {} alerts", removed);
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MonitorState;
    use fxwatch_source::ScriptedSource;
    use fxwatch_store::AlertStore;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn shared_state(dir: &TempDir) -> SharedState {
        MonitorState::new(AlertStore::open(dir.path().join("alertas.json"))).into_shared()
    }

    #[tokio::test]
    async fn test_current_quote_builds_trend_from_history() {
        let dir = TempDir::new().unwrap();
        let state = shared_state(&dir);
        let source = ScriptedSource::from_values([dec!(5.00), dec!(5.01)]);

        let first = current_quote(&source, &state).await.unwrap();
        assert_eq!(first.trend, Trend::Collecting);

        let second = current_quote(&source, &state).await.unwrap();
        assert!(matches!(second.trend, Trend::Rising { .. }));
        assert_eq!(state.lock().unwrap().history.len(), 2);
    }

    #[tokio::test]
    async fn test_current_quote_propagates_fetch_failure() {
        let dir = TempDir::new().unwrap();
        let state = shared_state(&dir);
        let source = ScriptedSource::from_values([]);

        assert!(current_quote(&source, &state).await.is_err());
        assert!(state.lock().unwrap().history.is_empty());
    }

    #[test]
    fn test_alert_lifecycle_through_handlers() {
        let dir = TempDir::new().unwrap();
        let state = shared_state(&dir);

        create_alert(&state, dec!(5.20), Direction::Above).unwrap();
        create_alert(&state, dec!(5.10), Direction::Below).unwrap();

        let err = create_alert(&state, dec!(5.20), Direction::Above).unwrap_err();
        assert!(matches!(err, AlertError::Duplicate { .. }));

        assert_eq!(list_alerts(&state).len(), 2);

        let removed = remove_alert(&state, 1).unwrap();
        assert_eq!(removed.value, dec!(5.20));

        assert!(remove_alert(&state, 5).is_err());
        assert_eq!(clear_alerts(&state), 1);
        assert!(list_alerts(&state).is_empty());
    }

    #[test]
    fn test_help_mentions_every_command() {
        let help = help_text();
        for needle in ["quote", "alert add", "alert list", "alert remove", "alert clear"] {
            assert!(help.contains(needle), "help text missing '{}'", needle);
        }
    }
}
