//! Alert store with eager JSON persistence.

use fxwatch_core::error::{AlertError, PersistenceError};
use fxwatch_core::types::{Alert, Direction};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing::{info, warn};

/// Ordered collection of armed alerts, mirrored to a JSON file.
///
/// List order is creation order and drives the 1-based display indexing.
/// Every mutation re-reads the file first and rewrites it before the
/// operation returns, so a long-lived store never clobbers alerts that
/// another process armed in the meantime and the in-memory list and the
/// file never diverge across a successful call. A failed write is logged
/// and the in-memory mutation stands.
pub struct AlertStore {
    path: PathBuf,
    alerts: Vec<Alert>,
}

impl AlertStore {
    /// Open the store at `path`, loading any existing alerts.
    ///
    /// A missing or unreadable file yields an empty store with a warning
    /// rather than failing startup.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let alerts = match Self::load_from(&path) {
            Ok(alerts) => {
                info!("loaded {} alerts from {:?}", alerts.len(), path);
                alerts
            }
            Err(PersistenceError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("no alert file at {:?}, starting empty", path);
                Vec::new()
            }
            Err(e) => {
                warn!("could not load alerts from {:?}, starting empty: {}", path, e);
                Vec::new()
            }
        };

        Self { path, alerts }
    }

    fn load_from(path: &PathBuf) -> Result<Vec<Alert>, PersistenceError> {
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| PersistenceError::Deserialize(e.to_string()))
    }

    /// Re-read the file so the next mutation starts from what other
    /// processes may have written since this store loaded.
    ///
    /// A vanished file means some other writer cleared it; an unreadable
    /// one keeps the in-memory list as the best available view.
    pub(crate) fn reload(&mut self) {
        match Self::load_from(&self.path) {
            Ok(alerts) => self.alerts = alerts,
            Err(PersistenceError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                self.alerts.clear();
            }
            Err(e) => {
                warn!(
                    "could not reload alerts from {:?}, keeping in-memory list: {}",
                    self.path, e
                );
            }
        }
    }

    /// Arm a new alert, rejecting duplicates of `(value, direction)`.
    pub fn add(&mut self, value: Decimal, direction: Direction) -> Result<Alert, AlertError> {
        self.reload();
        if self.alerts.iter().any(|a| a.same_threshold(value, direction)) {
            return Err(AlertError::Duplicate { value, direction });
        }

        let alert = Alert::new(value, direction);
        self.alerts.push(alert.clone());
        self.persist();
        Ok(alert)
    }

    /// All armed alerts in creation order.
    pub fn list(&self) -> &[Alert] {
        &self.alerts
    }

    /// Number of armed alerts.
    #[inline]
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    /// Check if no alerts are armed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Remove the alert at the 1-based display index.
    pub fn remove_at(&mut self, index: usize) -> Result<Alert, AlertError> {
        self.reload();
        if index < 1 || index > self.alerts.len() {
            return Err(AlertError::IndexOutOfRange {
                index,
                count: self.alerts.len(),
            });
        }

        let removed = self.alerts.remove(index - 1);
        self.persist();
        Ok(removed)
    }

    /// Remove every alert, returning how many were removed.
    pub fn clear(&mut self) -> usize {
        self.reload();
        let removed = self.alerts.len();
        if removed > 0 {
            self.alerts.clear();
            self.persist();
        }
        removed
    }

    /// Rewrite the full alert list to disk.
    pub fn save(&self) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(&self.alerts)
            .map_err(|e| PersistenceError::Serialize(e.to_string()))?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    /// Save, logging instead of failing the caller on write errors.
    pub(crate) fn persist(&self) {
        if let Err(e) = self.save() {
            warn!("could not persist {} alerts to {:?}: {}", self.alerts.len(), self.path, e);
        }
    }

    pub(crate) fn alerts_mut(&mut self) -> &mut Vec<Alert> {
        &mut self.alerts
    }
}
