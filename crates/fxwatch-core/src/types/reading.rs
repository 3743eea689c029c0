//! Rate readings and the rolling history window.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Number of readings retained for trend analysis.
pub const HISTORY_CAPACITY: usize = 10;

/// One observed exchange-rate sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Quoted rate (bid price).
    pub value: Decimal,
    /// When the sample was observed.
    pub observed_at: DateTime<Utc>,
}

impl Reading {
    /// Create a reading observed now.
    pub fn now(value: Decimal) -> Self {
        Self {
            value,
            observed_at: Utc::now(),
        }
    }

    /// Create a reading with an explicit observation time.
    pub fn at(value: Decimal, observed_at: DateTime<Utc>) -> Self {
        Self { value, observed_at }
    }
}

/// Rolling window of recent readings, oldest first.
///
/// Bounded at [`HISTORY_CAPACITY`]; appending beyond capacity evicts the
/// single oldest entry.
#[derive(Debug, Clone, Default)]
pub struct RateHistory {
    readings: VecDeque<Reading>,
}

impl RateHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            readings: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Append a reading, evicting the oldest entry when full.
    pub fn append(&mut self, reading: Reading) {
        if self.readings.len() >= HISTORY_CAPACITY {
            self.readings.pop_front();
        }
        self.readings.push_back(reading);
    }

    /// The most recent reading.
    pub fn latest(&self) -> Option<&Reading> {
        self.readings.back()
    }

    /// The second-to-last reading, used for trend comparison.
    pub fn previous(&self) -> Option<&Reading> {
        let len = self.readings.len();
        if len < 2 {
            return None;
        }
        self.readings.get(len - 2)
    }

    /// Number of retained readings.
    #[inline]
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Check if the history is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Iterate readings oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Reading> {
        self.readings.iter()
    }
}
