//! Signal types shared by the webhook and the chat command handler.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shown in place of any field the alert did not carry.
pub const PLACEHOLDER: &str = "N/A";

/// Inbound TradingView alert body.
///
/// Every field is optional and may be a string or a number.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookPayload {
    pub pair: Option<Value>,
    pub timeframe: Option<Value>,
    pub signal: Option<Value>,
    pub confidence: Option<Value>,
    pub tp: Option<Value>,
    pub sl: Option<Value>,
}

/// Direction of a signal, derived from its free-form text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Buy,
    Sell,
    Neutral,
}

impl Direction {
    /// Case-insensitive substring match; "BUY" wins over "SELL".
    pub fn classify(signal: &str) -> Self {
        let upper = signal.to_uppercase();
        if upper.contains("BUY") {
            Direction::Buy
        } else if upper.contains("SELL") {
            Direction::Sell
        } else {
            Direction::Neutral
        }
    }

    /// Emoji indicator used in chat messages.
    pub fn indicator(&self) -> &'static str {
        match self {
            Direction::Buy => "🟢",
            Direction::Sell => "🔴",
            Direction::Neutral => "⚪️",
        }
    }
}

/// Latest signal stored for a (pair, timeframe).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalRecord {
    /// Uppercased instrument, e.g. "BTCUSDT"
    pub pair: String,
    pub timeframe: String,
    /// Raw signal text as sent by the alert
    pub signal: String,
    pub confidence: String,
    pub take_profit: String,
    pub stop_loss: String,
    /// When the webhook was processed
    pub observed_at: DateTime<Utc>,
}

impl SignalRecord {
    /// Build a record from a webhook payload, substituting the placeholder
    /// for anything absent.
    pub fn from_payload(payload: &WebhookPayload, observed_at: DateTime<Utc>) -> Self {
        Self {
            pair: normalize_pair(&display_value(payload.pair.as_ref())),
            timeframe: display_value(payload.timeframe.as_ref()),
            signal: display_value(payload.signal.as_ref()),
            confidence: display_value(payload.confidence.as_ref()),
            take_profit: display_value(payload.tp.as_ref()),
            stop_loss: display_value(payload.sl.as_ref()),
            observed_at,
        }
    }

    pub fn direction(&self) -> Direction {
        Direction::classify(&self.signal)
    }

    /// Cache key for this record.
    pub fn key(&self) -> String {
        signal_key(&self.pair, &self.timeframe)
    }
}

/// Composite cache key: uppercased pair, underscore, timeframe.
pub fn signal_key(pair: &str, timeframe: &str) -> String {
    format!("{}_{}", normalize_pair(pair), timeframe.trim())
}

pub fn normalize_pair(pair: &str) -> String {
    pair.trim().to_uppercase()
}

/// Render an optional JSON value as an opaque display string.
pub fn display_value(value: Option<&Value>) -> String {
    let rendered = match value {
        None | Some(Value::Null) => return PLACEHOLDER.to_string(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(other) => other.to_string(),
    };

    if rendered.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        rendered
    }
}
