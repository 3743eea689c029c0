//! Evaluation of armed alerts against a new reading.

use crate::store::AlertStore;
use fxwatch_core::types::Alert;
use rust_decimal::Decimal;

impl AlertStore {
    /// Remove and return every alert triggered by `current`, in list order.
    ///
    /// One-shot semantics: a returned alert is gone from the store and will
    /// never fire again. The file is re-read first, so alerts armed by
    /// another process since this store loaded are evaluated too, then
    /// rewritten once per evaluation, only when at least one alert fired.
    pub fn take_triggered(&mut self, current: Decimal) -> Vec<Alert> {
        self.reload();
        let mut triggered = Vec::new();
        self.alerts_mut().retain(|alert| {
            if alert.is_triggered_by(current) {
                triggered.push(alert.clone());
                false
            } else {
                true
            }
        });

        if !triggered.is_empty() {
            self.persist();
        }
        triggered
    }
}
