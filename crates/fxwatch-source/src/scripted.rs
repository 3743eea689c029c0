//! Deterministic quote source for tests and dry runs.

use async_trait::async_trait;
use chrono::Utc;
use fxwatch_core::error::FetchError;
use fxwatch_core::traits::RateSource;
use fxwatch_core::types::Reading;
use rust_decimal::Decimal;
use std::collections::VecDeque;
use std::sync::Mutex;

/// One step of a scripted quote sequence.
#[derive(Debug, Clone, Copy)]
pub enum ScriptStep {
    /// Return this rate.
    Value(Decimal),
    /// Simulate a network failure.
    Outage,
}

/// Rate source that replays a fixed sequence of steps.
///
/// Each call consumes one step; an exhausted script reports a connection
/// error, so a finite script bounds how far a test loop can run.
pub struct ScriptedSource {
    pair: String,
    steps: Mutex<VecDeque<ScriptStep>>,
}

impl ScriptedSource {
    /// Create a source replaying the given steps in order.
    pub fn new(steps: impl IntoIterator<Item = ScriptStep>) -> Self {
        Self {
            pair: "USD-BRL".to_string(),
            steps: Mutex::new(steps.into_iter().collect()),
        }
    }

    /// Convenience constructor for a plain sequence of rates.
    pub fn from_values(values: impl IntoIterator<Item = Decimal>) -> Self {
        Self::new(values.into_iter().map(ScriptStep::Value))
    }

    /// Steps not yet consumed.
    pub fn remaining(&self) -> usize {
        self.steps.lock().unwrap().len()
    }
}

#[async_trait]
impl RateSource for ScriptedSource {
    async fn latest(&self) -> Result<Reading, FetchError> {
        let step = self.steps.lock().unwrap().pop_front();
        match step {
            Some(ScriptStep::Value(value)) => Ok(Reading::at(value, Utc::now())),
            Some(ScriptStep::Outage) => {
                Err(FetchError::Connection("scripted outage".to_string()))
            }
            None => Err(FetchError::Connection("script exhausted".to_string())),
        }
    }

    fn pair(&self) -> &str {
        &self.pair
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_replays_values_in_order() {
        let source = ScriptedSource::from_values([dec!(5.00), dec!(5.01)]);

        assert_eq!(source.latest().await.unwrap().value, dec!(5.00));
        assert_eq!(source.latest().await.unwrap().value, dec!(5.01));
        assert!(source.latest().await.is_err());
    }

    #[tokio::test]
    async fn test_outage_step_fails_once() {
        let source = ScriptedSource::new([
            ScriptStep::Outage,
            ScriptStep::Value(dec!(5.10)),
        ]);

        assert!(matches!(
            source.latest().await,
            Err(FetchError::Connection(_))
        ));
        assert_eq!(source.latest().await.unwrap().value, dec!(5.10));
        assert_eq!(source.remaining(), 0);
    }
}
