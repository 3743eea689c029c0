//! AwesomeAPI currency quote client.

use async_trait::async_trait;
use chrono::Utc;
use fxwatch_core::error::FetchError;
use fxwatch_core::traits::RateSource;
use fxwatch_core::types::Reading;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// AwesomeAPI client configuration.
#[derive(Debug, Clone)]
pub struct AwesomeApiConfig {
    /// Quote endpoint, e.g. `https://economia.awesomeapi.com.br/last/USD-BRL`.
    pub endpoint: String,
    /// Currency pair, e.g. `USD-BRL`.
    pub pair: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for AwesomeApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://economia.awesomeapi.com.br/last/USD-BRL".to_string(),
            pair: "USD-BRL".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// AwesomeAPI response entry for one pair.
///
/// The body maps a concatenated pair key (`USDBRL`) to a quote object;
/// only the bid field is used.
#[derive(Debug, Deserialize)]
struct PairQuote {
    bid: String,
}

/// Quote source backed by the AwesomeAPI economy endpoint.
pub struct AwesomeApiSource {
    config: AwesomeApiConfig,
    client: Client,
}

impl AwesomeApiSource {
    /// Create a new client with the configured timeout.
    pub fn new(config: AwesomeApiConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FetchError::Connection(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Response key for the configured pair: `USD-BRL` -> `USDBRL`.
    fn pair_key(&self) -> String {
        self.config.pair.replace('-', "")
    }

    /// Extract the bid price from a decoded response body.
    fn extract_bid(
        quotes: &HashMap<String, PairQuote>,
        pair_key: &str,
    ) -> Result<Decimal, FetchError> {
        let quote = quotes
            .get(pair_key)
            .ok_or_else(|| FetchError::MissingField(pair_key.to_string()))?;

        quote
            .bid
            .parse::<Decimal>()
            .map_err(|e| FetchError::Parse(format!("bid '{}': {}", quote.bid, e)))
    }
}

#[async_trait]
impl RateSource for AwesomeApiSource {
    async fn latest(&self) -> Result<Reading, FetchError> {
        let resp = self
            .client
            .get(&self.config.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(FetchError::Status(format!("{}: {}", status, text)));
        }

        let quotes: HashMap<String, PairQuote> = resp
            .json()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))?;

        let value = Self::extract_bid(&quotes, &self.pair_key())?;
        debug!("fetched {} bid {}", self.config.pair, value);

        Ok(Reading::at(value, Utc::now()))
    }

    fn pair(&self) -> &str {
        &self.config.pair
    }

    fn name(&self) -> &str {
        "AwesomeAPI"
    }
}
