//! One-shot threshold alerts.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison sense of an alert relative to its threshold value.
///
/// The serde names are the on-disk contract of the alert file and must stay
/// `acima`/`abaixo` for compatibility with existing files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Fires when the rate rises to or above the threshold.
    #[serde(rename = "acima")]
    Above,
    /// Fires when the rate falls to or below the threshold.
    #[serde(rename = "abaixo")]
    Below,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Above => write!(f, "above"),
            Direction::Below => write!(f, "below"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "above" | "acima" => Ok(Direction::Above),
            "below" | "abaixo" => Ok(Direction::Below),
            _ => Err(format!("unknown direction '{}': use above or below", s)),
        }
    }
}

/// A user-defined threshold alert.
///
/// Uniquely identified by `(value, direction)`; never edited in place.
/// Removed when triggered or explicitly deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Threshold rate, written to disk as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
    /// Comparison sense.
    #[serde(rename = "tipo")]
    pub direction: Direction,
    /// Creation time, ISO-8601 on disk.
    #[serde(rename = "criado_em", with = "iso_timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Alert {
    /// Create an alert stamped with the current time.
    pub fn new(value: Decimal, direction: Direction) -> Self {
        Self {
            value,
            direction,
            created_at: Utc::now(),
        }
    }

    /// Check whether `current` satisfies this alert.
    ///
    /// The boundary is inclusive for both directions: an alert at exactly
    /// the current rate fires.
    pub fn is_triggered_by(&self, current: Decimal) -> bool {
        match self.direction {
            Direction::Above => current >= self.value,
            Direction::Below => current <= self.value,
        }
    }

    /// Check whether another alert targets the same `(value, direction)`.
    pub fn same_threshold(&self, value: Decimal, direction: Direction) -> bool {
        self.value == value && self.direction == direction
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R$ {:.4} ({})", self.value, self.direction)
    }
}

/// ISO-8601 timestamps for the alert file.
///
/// Always serializes RFC 3339. Deserialization also accepts offset-less
/// timestamps (assumed UTC), the form `datetime.isoformat()` produced in
/// alert files written by the original bot.
mod iso_timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&ts.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}
