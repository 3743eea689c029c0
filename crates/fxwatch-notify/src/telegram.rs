//! Telegram Bot API notifier.

use async_trait::async_trait;
use fxwatch_core::error::NotifyError;
use fxwatch_core::traits::Notifier;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

/// Telegram credentials.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub token: String,
    pub chat_id: String,
}

impl TelegramConfig {
    /// Create config directly with token and chat id.
    pub fn new(token: String, chat_id: String) -> Self {
        Self { token, chat_id }
    }

    /// Load from environment variables.
    pub fn from_env(token_var: &str, chat_id_var: &str) -> Result<Self, NotifyError> {
        let token = std::env::var(token_var)
            .map_err(|_| NotifyError::Configuration(format!("{} not set", token_var)))?;
        let chat_id = std::env::var(chat_id_var)
            .map_err(|_| NotifyError::Configuration(format!("{} not set", chat_id_var)))?;

        Ok(Self { token, chat_id })
    }
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

/// Notifier that pushes messages through the Telegram Bot API.
pub struct TelegramNotifier {
    config: TelegramConfig,
    client: Client,
}

impl TelegramNotifier {
    /// Create a new Telegram notifier.
    pub fn new(config: TelegramConfig) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .build()
            .map_err(|e| NotifyError::Connection(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn send_url(&self) -> String {
        format!("https://api.telegram.org/bot{}/sendMessage", self.config.token)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let request = SendMessageRequest {
            chat_id: &self.config.chat_id,
            text,
            parse_mode: "Markdown",
        };

        let resp = self
            .client
            .post(self.send_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| NotifyError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(NotifyError::ApiError(format!("{}: {}", status, body)));
        }

        debug!("telegram message delivered to chat {}", self.config.chat_id);
        Ok(())
    }

    fn name(&self) -> &str {
        "Telegram"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_message_payload_shape() {
        let request = SendMessageRequest {
            chat_id: "12345",
            text: "⚠️ *USD-BRL Alert*",
            parse_mode: "Markdown",
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["chat_id"], "12345");
        assert_eq!(json["parse_mode"], "Markdown");
        assert!(json["text"].as_str().unwrap().contains("USD-BRL"));
    }

    #[test]
    fn test_from_env_missing_token() {
        let err = TelegramConfig::from_env("FXWATCH_TEST_NO_TOKEN", "FXWATCH_TEST_NO_CHAT")
            .unwrap_err();
        assert!(matches!(err, NotifyError::Configuration(_)));
    }
}
