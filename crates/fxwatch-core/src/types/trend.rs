//! Trend classification from the last two readings.

use rust_decimal::Decimal;
use std::fmt;

/// Directional label for the latest rate movement.
///
/// Derived purely from `(current, previous)`; called every monitor cycle
/// and on demand for interactive quote requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    /// Not enough history to compare yet.
    Collecting,
    /// Current reading is above the previous one.
    Rising { diff: Decimal, pct: Decimal },
    /// Current reading is below the previous one.
    Falling { diff: Decimal, pct: Decimal },
    /// No change between the last two readings.
    Flat,
}

impl Trend {
    /// Classify the movement from `previous` to `current`.
    pub fn classify(current: Decimal, previous: Option<Decimal>) -> Self {
        let Some(previous) = previous else {
            return Trend::Collecting;
        };

        let diff = current - previous;
        let pct = diff
            .checked_div(previous)
            .map(|r| r * Decimal::ONE_HUNDRED)
            .unwrap_or_default();

        if diff > Decimal::ZERO {
            Trend::Rising { diff, pct }
        } else if diff < Decimal::ZERO {
            Trend::Falling { diff, pct }
        } else {
            Trend::Flat
        }
    }

    /// Emoji marker for messages.
    pub fn symbol(&self) -> &'static str {
        match self {
            Trend::Collecting => "🔄",
            Trend::Rising { .. } => "📈",
            Trend::Falling { .. } => "📉",
            Trend::Flat => "➡️",
        }
    }

    /// Human-readable movement label.
    pub fn label(&self) -> String {
        match self {
            Trend::Collecting => "insufficient data".to_string(),
            Trend::Rising { diff, pct } => format!("+{:.4} | +{:.2}%", diff, pct),
            Trend::Falling { diff, pct } => format!("{:.4} | {:.2}%", diff, pct),
            Trend::Flat => "stable, 0.00%".to_string(),
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbol(), self.label())
    }
}
