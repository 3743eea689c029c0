//! Read-only status view.

use crate::state::SharedState;
use chrono::{DateTime, Utc};
use fxwatch_core::error::PersistenceError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Coherent point-in-time view of the monitor state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub active_alerts: usize,
    pub history_len: usize,
    pub last_check: Option<DateTime<Utc>>,
}

/// Take a snapshot. Holds the lock just long enough to read three fields;
/// a stale-but-consistent view is fine.
pub fn snapshot(state: &SharedState) -> StatusSnapshot {
    let state = state.lock().unwrap();
    StatusSnapshot {
        active_alerts: state.alerts.len(),
        history_len: state.history.len(),
        last_check: state.last_check,
    }
}

/// Write the current snapshot to `path` so other processes can read it.
///
/// The watcher calls this after every cycle; the `status` subcommand runs
/// in its own process and sees the live loop only through this file.
pub fn write_status_file(path: &Path, state: &SharedState) -> Result<(), PersistenceError> {
    let snap = snapshot(state);
    let json = serde_json::to_string_pretty(&snap)
        .map_err(|e| PersistenceError::Serialize(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Read the snapshot a running watcher last published at `path`.
pub fn read_status_file(path: &Path) -> Result<StatusSnapshot, PersistenceError> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| PersistenceError::Deserialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MonitorState;
    use fxwatch_core::types::{Direction, Reading};
    use fxwatch_store::AlertStore;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    #[test]
    fn test_snapshot_reflects_state() {
        let dir = TempDir::new().unwrap();
        let state =
            MonitorState::new(AlertStore::open(dir.path().join("alertas.json"))).into_shared();

        let empty = snapshot(&state);
        assert_eq!(empty.active_alerts, 0);
        assert_eq!(empty.history_len, 0);
        assert!(empty.last_check.is_none());

        {
            let mut state = state.lock().unwrap();
            state.alerts.add(dec!(5.20), Direction::Above).unwrap();
            state.record(Reading::now(dec!(5.00)));
        }

        let current = snapshot(&state);
        assert_eq!(current.active_alerts, 1);
        assert_eq!(current.history_len, 1);
        assert!(current.last_check.is_some());
    }

    #[test]
    fn test_status_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("status.json");
        let state =
            MonitorState::new(AlertStore::open(dir.path().join("alertas.json"))).into_shared();
        state.lock().unwrap().record(Reading::now(dec!(5.00)));

        write_status_file(&path, &state).unwrap();

        let published = read_status_file(&path).unwrap();
        assert_eq!(published, snapshot(&state));
        assert_eq!(published.history_len, 1);
    }

    #[test]
    fn test_missing_status_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(read_status_file(&dir.path().join("status.json")).is_err());
    }
}
