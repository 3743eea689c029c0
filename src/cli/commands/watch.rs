//! Watch command: run the background monitor loop.

use anyhow::Result;
use fxwatch_config::load_config_or_default;
use fxwatch_core::traits::Notifier;
use fxwatch_monitor::{MonitorState, Watcher, WatcherConfig};
use fxwatch_notify::{LogNotifier, TelegramConfig, TelegramNotifier};
use fxwatch_source::{AwesomeApiConfig, AwesomeApiSource};
use fxwatch_store::AlertStore;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::cli::WatchArgs;

pub async fn run(args: WatchArgs, config_path: &Path) -> Result<()> {
    let config = load_config_or_default(config_path)?;

    let store = AlertStore::open(&config.storage.alerts_file);
    info!("starting with {} armed alerts", store.len());
    let state = MonitorState::new(store).into_shared();

    let source = Arc::new(AwesomeApiSource::new(AwesomeApiConfig {
        endpoint: config.source.endpoint.clone(),
        pair: config.source.pair.clone(),
        timeout: Duration::from_secs(config.source.timeout_secs),
    })?);

    let notifier: Arc<dyn Notifier> = if args.dry_run {
        info!("dry run: notifications go to the log");
        Arc::new(LogNotifier::new())
    } else {
        match TelegramConfig::from_env(&config.telegram.token_env, &config.telegram.chat_id_env)
        {
            Ok(telegram) => Arc::new(TelegramNotifier::new(telegram)?),
            Err(e) => {
                warn!("telegram not configured ({}), notifications go to the log", e);
                Arc::new(LogNotifier::new())
            }
        }
    };

    let watcher = Watcher::new(
        state,
        source,
        notifier,
        WatcherConfig {
            interval: Duration::from_secs(config.monitor.interval_secs),
            startup_delay: Duration::from_secs(config.monitor.startup_delay_secs),
            move_threshold_pct: config.monitor.move_threshold_pct,
            status_file: Some(config.storage.status_file.clone().into()),
        },
    );

    watcher.run().await;
    Ok(())
}
