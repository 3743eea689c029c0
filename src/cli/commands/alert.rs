//! Alert commands: arm, list, disarm.

use anyhow::Result;
use fxwatch_config::load_config_or_default;
use fxwatch_monitor::{commands, report, MonitorState};
use fxwatch_store::AlertStore;
use std::path::Path;

use crate::cli::{AlertArgs, AlertCommands};

pub async fn run(args: AlertArgs, config_path: &Path) -> Result<()> {
    let config = load_config_or_default(config_path)?;
    let state = MonitorState::new(AlertStore::open(&config.storage.alerts_file)).into_shared();

    match args.command {
        AlertCommands::Add { value, direction } => {
            match commands::create_alert(&state, value, direction) {
                Ok(alert) => println!(
                    "✅ Alert armed: you will be notified when the rate goes {} R$ {:.4}",
                    alert.direction, alert.value
                ),
                Err(e) => println!("⚠️ {}", e),
            }
        }
        AlertCommands::List => {
            println!("{}", report::alert_list_text(&commands::list_alerts(&state)));
        }
        AlertCommands::Remove { index } => match commands::remove_alert(&state, index) {
            Ok(alert) => println!("🗑️ Alert removed: {}", alert),
            Err(e) => println!("⚠️ {}", e),
        },
        AlertCommands::Clear => {
            let removed = commands::clear_alerts(&state);
            if removed == 0 {
                println!("📋 No alerts to remove.");
            } else {
                println!("🗑️ All {} alerts removed.", removed);
            }
        }
    }

    Ok(())
}
