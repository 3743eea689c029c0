//! Process-wide monitor state.

use chrono::{DateTime, Utc};
use fxwatch_core::types::{RateHistory, Reading};
use fxwatch_store::AlertStore;
use std::sync::{Arc, Mutex};

/// State shared by the watcher loop, command handlers and the status view.
///
/// All access goes through one mutex so that alert mutations and the
/// evaluator's read-then-remove sequence never interleave. Nothing holding
/// the lock performs network I/O; the alert file write is the only
/// synchronous I/O done under it.
pub struct MonitorState {
    pub history: RateHistory,
    pub alerts: AlertStore,
    pub last_check: Option<DateTime<Utc>>,
}

pub type SharedState = Arc<Mutex<MonitorState>>;

impl MonitorState {
    /// Create fresh state around a loaded alert store.
    pub fn new(alerts: AlertStore) -> Self {
        Self {
            history: RateHistory::new(),
            alerts,
            last_check: None,
        }
    }

    /// Record a successful reading: append to history, stamp last check.
    pub fn record(&mut self, reading: Reading) {
        self.last_check = Some(reading.observed_at);
        self.history.append(reading);
    }

    /// Wrap in the shared mutex handle.
    pub fn into_shared(self) -> SharedState {
        Arc::new(Mutex::new(self))
    }
}
