//! Status command: print a snapshot as JSON.

use anyhow::Result;
use fxwatch_config::load_config_or_default;
use fxwatch_monitor::{read_status_file, snapshot, MonitorState};
use fxwatch_store::AlertStore;
use std::path::Path;
use tracing::warn;

pub async fn run(config_path: &Path) -> Result<()> {
    let config = load_config_or_default(config_path)?;

    // A running watcher publishes its snapshot after every cycle; without
    // one, only the alert file is available and history stays empty.
    let view = match read_status_file(Path::new(&config.storage.status_file)) {
        Ok(view) => view,
        Err(e) => {
            warn!(
                "no watcher status at {:?} ({}), reporting from the alert file",
                config.storage.status_file, e
            );
            let state =
                MonitorState::new(AlertStore::open(&config.storage.alerts_file)).into_shared();
            snapshot(&state)
        }
    };

    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
