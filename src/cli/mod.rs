//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use fxwatch_core::types::Direction;
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fxwatch")]
#[command(author, version, about = "USD-BRL exchange rate monitor with one-shot threshold alerts")]
#[command(after_long_help = fxwatch_monitor::commands::help_text())]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the background monitor loop
    Watch(WatchArgs),
    /// Fetch the current rate with its trend
    Quote,
    /// Manage threshold alerts
    Alert(AlertArgs),
    /// Print a status snapshot as JSON
    Status,
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct WatchArgs {
    /// Send notifications to the log instead of Telegram
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(clap::Args)]
pub struct AlertArgs {
    #[command(subcommand)]
    pub command: AlertCommands,
}

#[derive(Subcommand)]
pub enum AlertCommands {
    /// Arm a new one-shot alert
    Add {
        /// Threshold rate, e.g. 5.20 (5,20 also accepted)
        #[arg(value_parser = parse_rate)]
        value: Decimal,

        /// Comparison sense: above or below (acima/abaixo also accepted)
        direction: Direction,
    },
    /// List armed alerts
    List,
    /// Disarm an alert by its list number
    Remove {
        /// 1-based number shown by `alert list`
        index: usize,
    },
    /// Disarm all alerts
    Clear,
}

/// Parse a rate, accepting a comma as the decimal separator.
fn parse_rate(raw: &str) -> Result<Decimal, String> {
    raw.replace(',', ".")
        .parse::<Decimal>()
        .map_err(|e| format!("invalid rate '{}': {}", raw, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_rate_accepts_comma_decimals() {
        assert_eq!(parse_rate("5.20").unwrap(), dec!(5.20));
        assert_eq!(parse_rate("5,20").unwrap(), dec!(5.20));
        assert!(parse_rate("five").is_err());
    }
}
