//! The background polling loop.

use crate::report;
use crate::state::SharedState;
use crate::status;
use fxwatch_core::traits::{Notifier, RateSource};
use fxwatch_core::types::{Alert, Reading, Trend};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{info, warn};

/// Watcher timing and threshold settings.
#[derive(Debug, Clone)]
pub struct WatcherConfig {
    /// Fixed polling period.
    pub interval: Duration,
    /// Delay before the first cycle.
    pub startup_delay: Duration,
    /// Percentage move against the previous reading that counts as
    /// significant on its own.
    pub move_threshold_pct: Decimal,
    /// Where to publish a snapshot after each cycle for the `status`
    /// subcommand, which runs in a separate process.
    pub status_file: Option<PathBuf>,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1800),
            startup_delay: Duration::from_secs(10),
            move_threshold_pct: dec!(0.1),
            status_file: None,
        }
    }
}

/// Outcome of one completed cycle.
#[derive(Debug)]
pub struct CycleReport {
    pub reading: Reading,
    pub trend: Trend,
    pub significant: bool,
    pub triggered: Vec<Alert>,
    pub notified: bool,
}

/// Periodic monitor: fetches a quote, updates history, evaluates alerts
/// and dispatches notifications.
///
/// A single task runs cycles one at a time; ticks that land while a cycle
/// is still executing are skipped, not queued.
pub struct Watcher {
    state: SharedState,
    source: Arc<dyn RateSource>,
    notifier: Arc<dyn Notifier>,
    config: WatcherConfig,
}

impl Watcher {
    pub fn new(
        state: SharedState,
        source: Arc<dyn RateSource>,
        notifier: Arc<dyn Notifier>,
        config: WatcherConfig,
    ) -> Self {
        Self {
            state,
            source,
            notifier,
            config,
        }
    }

    /// Run until the process stops. Cycle failures never break the loop.
    pub async fn run(&self) {
        info!(
            "watching {} via {} every {:?} (first check in {:?})",
            self.source.pair(),
            self.source.name(),
            self.config.interval,
            self.config.startup_delay
        );

        let start = Instant::now() + self.config.startup_delay;
        let mut ticker = interval_at(start, self.config.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            self.run_cycle().await;
        }
    }

    /// Execute one cycle. Returns `None` when the fetch failed and the
    /// cycle was skipped without touching any state.
    pub async fn run_cycle(&self) -> Option<CycleReport> {
        let reading = match self.source.latest().await {
            Ok(reading) => reading,
            Err(e) => {
                warn!("quote fetch failed, skipping cycle: {}", e);
                self.publish_status();
                return None;
            }
        };

        // Everything state-touching happens in this lock scope; the fetch
        // above and the dispatch below stay outside it.
        let (trend, significant, triggered) = {
            let mut state = self.state.lock().unwrap();
            let previous = state.history.latest().map(|r| r.value);
            state.record(reading);

            let trend = Trend::classify(reading.value, previous);
            let significant = self.is_significant(reading.value, previous);
            let triggered = state.alerts.take_triggered(reading.value);
            (trend, significant, triggered)
        };

        let mut notified = false;
        if significant || !triggered.is_empty() {
            let text =
                report::notification_text(self.source.pair(), &reading, &trend, &triggered);
            match self.notifier.send(&text).await {
                Ok(()) => {
                    notified = true;
                    info!(
                        "notification sent: rate {} trend {} ({} alerts fired)",
                        reading.value,
                        trend.label(),
                        triggered.len()
                    );
                }
                // Fired alerts stay consumed: the miss costs a message,
                // not threshold correctness.
                Err(e) => warn!("notification dispatch failed: {}", e),
            }
        } else {
            info!("rate stable at {}, no notification", reading.value);
        }

        self.publish_status();
        Some(CycleReport {
            reading,
            trend,
            significant,
            triggered,
            notified,
        })
    }

    fn publish_status(&self) {
        if let Some(path) = &self.config.status_file {
            if let Err(e) = status::write_status_file(path, &self.state) {
                warn!("could not write status file {:?}: {}", path, e);
            }
        }
    }

    fn is_significant(&self, current: Decimal, previous: Option<Decimal>) -> bool {
        let Some(previous) = previous else {
            return false;
        };
        let Some(ratio) = (current - previous).checked_div(previous) else {
            return false;
        };
        (ratio * Decimal::ONE_HUNDRED).abs() >= self.config.move_threshold_pct
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MonitorState;
    use async_trait::async_trait;
    use fxwatch_core::error::NotifyError;
    use fxwatch_core::types::Direction;
    use fxwatch_source::{ScriptStep, ScriptedSource};
    use fxwatch_store::AlertStore;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;
    use tempfile::TempDir;

    struct RecordingNotifier {
        sent: Mutex<Vec<String>>,
        fail: bool,
    }

    impl RecordingNotifier {
        fn new() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn messages(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn send(&self, text: &str) -> Result<(), NotifyError> {
            if self.fail {
                return Err(NotifyError::Connection("recording sink down".to_string()));
            }
            self.sent.lock().unwrap().push(text.to_string());
            Ok(())
        }

        fn name(&self) -> &str {
            "Recording"
        }
    }

    fn watcher_with(
        dir: &TempDir,
        steps: Vec<ScriptStep>,
        notifier: Arc<RecordingNotifier>,
    ) -> (Watcher, SharedState) {
        let store = AlertStore::open(dir.path().join("alertas.json"));
        let state = MonitorState::new(store).into_shared();
        let watcher = Watcher::new(
            state.clone(),
            Arc::new(ScriptedSource::new(steps)),
            notifier,
            WatcherConfig::default(),
        );
        (watcher, state)
    }

    #[tokio::test]
    async fn test_fetch_failure_skips_cycle_untouched() {
        let dir = TempDir::new().unwrap();
        let notifier = Arc::new(RecordingNotifier::new());
        let (watcher, state) = watcher_with(&dir, vec![ScriptStep::Outage], notifier.clone());

        state
            .lock()
            .unwrap()
            .alerts
            .add(dec!(5.00), Direction::Above)
            .unwrap();

        assert!(watcher.run_cycle().await.is_none());

        let state = state.lock().unwrap();
        assert!(state.history.is_empty());
        assert!(state.last_check.is_none());
        assert_eq!(state.alerts.len(), 1);
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_alert_fires_once_then_stays_quiet() {
        let dir = TempDir::new().unwrap();
        let notifier = Arc::new(RecordingNotifier::new());
        let (watcher, state) = watcher_with(
            &dir,
            vec![
                ScriptStep::Value(dec!(5.01)),
                ScriptStep::Value(dec!(5.02)),
            ],
            notifier.clone(),
        );

        {
            let mut state = state.lock().unwrap();
            state.record(Reading::now(dec!(5.00)));
            state.alerts.add(dec!(5.00), Direction::Above).unwrap();
        }

        let first = watcher.run_cycle().await.unwrap();
        assert_eq!(first.triggered.len(), 1);
        assert_eq!(first.triggered[0].value, dec!(5.00));
        assert!(first.notified);

        let second = watcher.run_cycle().await.unwrap();
        assert!(second.triggered.is_empty());

        let messages = notifier.messages();
        assert!(messages[0].contains("Triggered alerts"));
        assert!(messages[0].contains("R$ 5.0000 (above)"));
    }

    #[tokio::test]
    async fn test_small_move_no_alerts_no_notification() {
        let dir = TempDir::new().unwrap();
        let notifier = Arc::new(RecordingNotifier::new());
        let (watcher, state) =
            watcher_with(&dir, vec![ScriptStep::Value(dec!(5.001))], notifier.clone());

        state.lock().unwrap().record(Reading::now(dec!(5.000)));

        // 0.02% move, below the 0.1% threshold.
        let report = watcher.run_cycle().await.unwrap();
        assert!(!report.significant);
        assert!(report.triggered.is_empty());
        assert!(!report.notified);
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_significant_move_notifies_without_alerts() {
        let dir = TempDir::new().unwrap();
        let notifier = Arc::new(RecordingNotifier::new());
        let (watcher, state) =
            watcher_with(&dir, vec![ScriptStep::Value(dec!(5.10))], notifier.clone());

        state.lock().unwrap().record(Reading::now(dec!(5.00)));

        let report = watcher.run_cycle().await.unwrap();
        assert!(report.significant);
        assert!(report.triggered.is_empty());
        assert!(report.notified);

        let messages = notifier.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("+0.1000 | +2.00%"));
    }

    #[tokio::test]
    async fn test_failed_dispatch_keeps_alerts_consumed() {
        let dir = TempDir::new().unwrap();
        let notifier = Arc::new(RecordingNotifier::failing());
        let (watcher, state) =
            watcher_with(&dir, vec![ScriptStep::Value(dec!(5.01))], notifier.clone());

        {
            let mut state = state.lock().unwrap();
            state.record(Reading::now(dec!(5.00)));
            state.alerts.add(dec!(5.00), Direction::Above).unwrap();
        }

        let report = watcher.run_cycle().await.unwrap();
        assert_eq!(report.triggered.len(), 1);
        assert!(!report.notified);

        // The alert stays removed even though the message never went out.
        assert!(state.lock().unwrap().alerts.is_empty());
    }

    #[tokio::test]
    async fn test_cycle_publishes_status_file_for_other_processes() {
        let dir = TempDir::new().unwrap();
        let status_path = dir.path().join("status.json");
        let notifier = Arc::new(RecordingNotifier::new());
        let store = AlertStore::open(dir.path().join("alertas.json"));
        let state = MonitorState::new(store).into_shared();
        let watcher = Watcher::new(
            state,
            Arc::new(ScriptedSource::from_values(vec![dec!(5.00)])),
            notifier,
            WatcherConfig {
                status_file: Some(status_path.clone()),
                ..WatcherConfig::default()
            },
        );

        watcher.run_cycle().await.unwrap();

        let published = crate::status::read_status_file(&status_path).unwrap();
        assert_eq!(published.history_len, 1);
        assert!(published.last_check.is_some());
    }

    #[tokio::test]
    async fn test_history_and_last_check_advance_per_cycle() {
        let dir = TempDir::new().unwrap();
        let notifier = Arc::new(RecordingNotifier::new());
        let (watcher, state) = watcher_with(
            &dir,
            vec![
                ScriptStep::Value(dec!(5.00)),
                ScriptStep::Value(dec!(5.00)),
            ],
            notifier,
        );

        watcher.run_cycle().await.unwrap();
        watcher.run_cycle().await.unwrap();

        let state = state.lock().unwrap();
        assert_eq!(state.history.len(), 2);
        assert!(state.last_check.is_some());
    }
}
