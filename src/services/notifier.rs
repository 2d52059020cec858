//! Telegram Bot API client.
//!
//! Sends chat messages and fetches updates for the command listener.
//! Every call is a single request: no retries, no backoff.

use crate::config::TelegramConfig;
use crate::error::{AppError, Result};
use crate::types::{GetUpdatesRequest, SendMessageRequest, SentMessage, TelegramResponse, Update};
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::debug;

const PARSE_MODE: &str = "Markdown";

/// Slack added on top of the long-poll timeout before the HTTP client gives up.
const CLIENT_TIMEOUT_SLACK_SECS: u64 = 10;

/// Outbound messaging client.
pub struct Notifier {
    client: Client,
    api_url: String,
    token: String,
    default_chat_id: Option<String>,
}

impl Notifier {
    /// Create a notifier from the Telegram configuration.
    pub fn new(config: &TelegramConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(
                config.poll_timeout_secs + CLIENT_TIMEOUT_SLACK_SECS,
            ))
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            token: config.token.clone(),
            default_chat_id: config.chat_id.clone(),
        })
    }

    /// Destination used by [`Notifier::send_message`].
    pub fn default_chat_id(&self) -> Option<&str> {
        self.default_chat_id.as_deref()
    }

    /// Send Markdown text to the configured default chat.
    pub async fn send_message(&self, text: &str) -> Result<()> {
        let chat_id = self.default_chat_id.as_deref().ok_or(AppError::NoDestination)?;
        self.send_message_to(chat_id, text).await
    }

    /// Send Markdown text to a specific chat.
    pub async fn send_message_to(&self, chat_id: &str, text: &str) -> Result<()> {
        let request = SendMessageRequest {
            chat_id,
            text,
            parse_mode: PARSE_MODE,
        };

        let sent: SentMessage = self.call("sendMessage", &request).await?;
        debug!("Sent message {} to chat {}", sent.message_id, chat_id);
        Ok(())
    }

    /// Long-poll for new updates starting at `offset`.
    pub async fn get_updates(&self, offset: Option<i64>, timeout_secs: u64) -> Result<Vec<Update>> {
        let request = GetUpdatesRequest {
            offset,
            timeout: timeout_secs,
            allowed_updates: vec!["message"],
        };

        self.call("getUpdates", &request).await
    }

    async fn call<B, T>(&self, method: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/bot{}/{}", self.api_url, self.token, method);

        // Strip the URL from transport errors so the token never reaches the logs.
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Reqwest(e.without_url()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::Reqwest(e.without_url()))?;

        let envelope: TelegramResponse<T> = match serde_json::from_str(&text) {
            Ok(envelope) => envelope,
            Err(e) if status.is_success() => return Err(e.into()),
            Err(_) => {
                return Err(AppError::Telegram(format!("{} returned {}", method, status)));
            }
        };

        if !status.is_success() || !envelope.ok {
            let description = envelope
                .description
                .unwrap_or_else(|| "no description".to_string());
            return Err(AppError::Telegram(format!(
                "{} failed ({}): {}",
                method, status, description
            )));
        }

        envelope
            .result
            .ok_or_else(|| AppError::Telegram(format!("{} returned no result", method)))
    }
}
