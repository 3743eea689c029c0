//! Quote command: fetch and print the current rate with its trend.

use anyhow::Result;
use fxwatch_config::load_config_or_default;
use fxwatch_core::traits::RateSource;
use fxwatch_monitor::{commands, report, MonitorState};
use fxwatch_source::{AwesomeApiConfig, AwesomeApiSource};
use fxwatch_store::AlertStore;
use std::path::Path;
use std::time::Duration;

pub async fn run(config_path: &Path) -> Result<()> {
    let config = load_config_or_default(config_path)?;

    let source = AwesomeApiSource::new(AwesomeApiConfig {
        endpoint: config.source.endpoint.clone(),
        pair: config.source.pair.clone(),
        timeout: Duration::from_secs(config.source.timeout_secs),
    })?;
    let state = MonitorState::new(AlertStore::open(&config.storage.alerts_file)).into_shared();

    match commands::current_quote(&source, &state).await {
        Ok(quote) => {
            println!(
                "{}",
                report::quote_text(source.pair(), &quote.reading, &quote.trend)
            );
            Ok(())
        }
        Err(e) => {
            println!("Could not fetch the current rate: {}", e);
            Err(e.into())
        }
    }
}
