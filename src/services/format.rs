//! Chat message rendering.
//!
//! All text uses Telegram's legacy Markdown (`parse_mode = "Markdown"`).

use crate::types::{SignalRecord, PLACEHOLDER};
use chrono::{DateTime, Local, Utc};

/// Example command shown in hints.
pub const EXAMPLE_COMMAND: &str = "/signal BTCUSDT 1h";

/// Render a timestamp in the server's local timezone.
pub fn local_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Append `%` unless the value is the placeholder or already has one.
fn percent(confidence: &str) -> String {
    if confidence == PLACEHOLDER || confidence.ends_with('%') {
        confidence.to_string()
    } else {
        format!("{}%", confidence)
    }
}

fn signal_body(record: &SignalRecord) -> String {
    format!(
        "📊 *{}* ({})\nSignal: {} *{}*\nConfidence: *{}*\nTP: {}\nSL: {}",
        record.pair,
        record.timeframe,
        record.direction().indicator(),
        record.signal.to_uppercase(),
        percent(&record.confidence),
        record.take_profit,
        record.stop_loss,
    )
}

/// Alert pushed to the default chat when a webhook arrives.
pub fn alert_message(record: &SignalRecord) -> String {
    format!(
        "{}\n🕒 {}\n\n#CryptoSignalBot",
        signal_body(record),
        local_time(record.observed_at)
    )
}

/// Reply to `/signal PAIR TIMEFRAME` when a record is cached.
pub fn signal_reply(record: &SignalRecord) -> String {
    format!(
        "{}\nLast Update: {}\n\n#LiveSignal",
        signal_body(record),
        local_time(record.observed_at)
    )
}

/// Reply when nothing is cached for the requested key.
pub fn not_found_reply(pair: &str, timeframe: &str) -> String {
    format!(
        "⚠️ No signal found for {} ({})\n\nWait for the next TradingView alert or trigger one manually.",
        pair, timeframe
    )
}

pub fn usage_reply() -> String {
    format!("❗️Usage: `{}`", EXAMPLE_COMMAND)
}

pub fn hint_reply() -> String {
    format!("💡 Try: `{}`", EXAMPLE_COMMAND)
}
