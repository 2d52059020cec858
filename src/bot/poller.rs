//! Long-polling command listener.

use crate::bot::handler::QueryHandler;
use crate::config::TelegramConfig;
use crate::error::Result;
use crate::services::Notifier;
use crate::types::Update;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};
use tracing::{debug, error, info, warn};

/// Pulls chat updates from Telegram and replies through the query handler.
pub struct CommandListener {
    notifier: Arc<Notifier>,
    handler: QueryHandler,
    poll_timeout_secs: u64,
    retry_delay: Duration,
}

impl CommandListener {
    pub fn new(notifier: Arc<Notifier>, handler: QueryHandler, config: &TelegramConfig) -> Self {
        Self {
            notifier,
            handler,
            poll_timeout_secs: config.poll_timeout_secs,
            retry_delay: Duration::from_secs(config.poll_retry_delay_secs),
        }
    }

    /// Run the listener on its own task.
    pub fn start(self) -> JoinHandle<()> {
        tokio::spawn(async move { self.run().await })
    }

    /// Poll forever. Failed polls are logged and retried after a fixed pause.
    pub async fn run(self) {
        info!("Telegram command listener running...");
        let mut offset = None;

        loop {
            match self.poll_once(offset).await {
                Ok(next) => {
                    if next.is_some() {
                        offset = next;
                    }
                }
                Err(e) => {
                    error!("Telegram getUpdates failed: {}", e);
                    sleep(self.retry_delay).await;
                }
            }
        }
    }

    /// Fetch one batch of updates and answer them.
    ///
    /// Returns the offset that acknowledges the batch, or `None` if it was empty.
    pub async fn poll_once(&self, offset: Option<i64>) -> Result<Option<i64>> {
        let updates = self
            .notifier
            .get_updates(offset, self.poll_timeout_secs)
            .await?;

        let next = updates.iter().map(|u| u.update_id + 1).max();
        for update in &updates {
            self.dispatch(update).await;
        }

        Ok(next)
    }

    async fn dispatch(&self, update: &Update) {
        let Some(message) = &update.message else {
            return;
        };
        // Stickers, photos and service messages carry no text.
        let Some(text) = &message.text else {
            return;
        };

        let chat_id = message.chat.id.to_string();
        debug!("Command from chat {}: {}", chat_id, text);

        let reply = self.handler.respond(text);
        if let Err(e) = self.notifier.send_message_to(&chat_id, &reply).await {
            warn!("Failed to reply to chat {}: {}", chat_id, e);
        }
    }
}
