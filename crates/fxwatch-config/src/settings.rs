//! Configuration structures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub source: SourceSettings,
    #[serde(default)]
    pub monitor: MonitorSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub telegram: TelegramSettings,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "fxwatch".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Quote API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSettings {
    pub endpoint: String,
    pub pair: String,
    pub timeout_secs: u64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://economia.awesomeapi.com.br/last/USD-BRL".to_string(),
            pair: "USD-BRL".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Monitor loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorSettings {
    pub interval_secs: u64,
    pub startup_delay_secs: u64,
    pub move_threshold_pct: Decimal,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        use rust_decimal_macros::dec;
        Self {
            interval_secs: 1800,
            startup_delay_secs: 10,
            move_threshold_pct: dec!(0.1),
        }
    }
}

/// Alert persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    pub alerts_file: String,
    pub status_file: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            alerts_file: "alertas.json".to_string(),
            status_file: "status.json".to_string(),
        }
    }
}

/// Telegram notification settings.
///
/// Credentials stay in the environment; the config names the variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramSettings {
    pub token_env: String,
    pub chat_id_env: String,
}

impl Default for TelegramSettings {
    fn default() -> Self {
        Self {
            token_env: "TELEGRAM_TOKEN".to_string(),
            chat_id_env: "CHAT_ID".to_string(),
        }
    }
}
