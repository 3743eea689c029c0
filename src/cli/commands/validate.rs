//! Validate configuration command.

use anyhow::Result;
use fxwatch_config::load_config;
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Pair: {}", config.source.pair);
            println!("Endpoint: {}", config.source.endpoint);
            println!("Check interval: {}s", config.monitor.interval_secs);
            println!("Move threshold: {}%", config.monitor.move_threshold_pct);
            println!("Alerts file: {}", config.storage.alerts_file);
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
