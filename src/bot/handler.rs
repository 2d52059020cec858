use crate::bot::commands::Command;
use crate::services::format;
use crate::services::SignalCache;
use std::sync::Arc;
use tracing::debug;

/// Answers chat commands from the signal cache.
#[derive(Clone)]
pub struct QueryHandler {
    cache: Arc<SignalCache>,
}

impl QueryHandler {
    pub fn new(cache: Arc<SignalCache>) -> Self {
        Self { cache }
    }

    /// Build the reply for a chat message.
    pub fn respond(&self, text: &str) -> String {
        match Command::parse(text) {
            Command::Signal { pair, timeframe } => self.lookup(&pair, &timeframe),
            Command::Usage => format::usage_reply(),
            Command::Unknown => format::hint_reply(),
        }
    }

    fn lookup(&self, pair: &str, timeframe: &str) -> String {
        match self.cache.get(pair, timeframe) {
            Some(record) => format::signal_reply(&record),
            None => {
                debug!("No cached signal for {}_{}", pair, timeframe);
                format::not_found_reply(pair, timeframe)
            }
        }
    }
}
