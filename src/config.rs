use crate::error::{AppError, Result};
use std::env;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Telegram bot configuration.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot token from BotFather.
    pub token: String,
    /// Default destination for webhook alerts.
    pub chat_id: Option<String>,
    /// Bot API base URL (overridable for a local Bot API server).
    pub api_url: String,
    /// Whether to run the `getUpdates` command listener.
    pub polling: bool,
    /// Long-poll timeout passed to `getUpdates` (seconds).
    pub poll_timeout_secs: u64,
    /// Pause after a failed poll (seconds).
    pub poll_retry_delay_secs: u64,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    pub telegram: TelegramConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("TELEGRAM_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| AppError::Config("TELEGRAM_TOKEN is not set".to_string()))?;

        let port = match lookup("PORT") {
            Some(p) => p
                .trim()
                .parse()
                .map_err(|_| AppError::Config(format!("PORT is not a valid port: {}", p)))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            telegram: TelegramConfig {
                token,
                chat_id: lookup("CHAT_ID").filter(|c| !c.trim().is_empty()),
                api_url: lookup("TELEGRAM_API_URL")
                    .map(|u| u.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
                polling: lookup("TELEGRAM_POLLING")
                    .map(|v| v == "true" || v == "1")
                    .unwrap_or(true),
                poll_timeout_secs: lookup("POLL_TIMEOUT_SECS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(30),
                poll_retry_delay_secs: lookup("POLL_RETRY_DELAY_SECS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(5),
            },
        })
    }
}
