//! TradingView webhook.
//!
//! - POST /signal - store the alert and forward it to the default chat
//!
//! Delivery to Telegram is best-effort: a failed send is logged and reported
//! as `"sent": false`, but the alert is still cached and the request succeeds.

use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::error::{AppError, Result};
use crate::services::format;
use crate::types::{SignalRecord, WebhookPayload};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    pub status: &'static str,
    pub sent: bool,
}

/// Create the webhook router.
pub fn router() -> Router<AppState> {
    Router::new().route("/signal", post(receive_signal))
}

/// POST /signal
async fn receive_signal(State(state): State<AppState>, body: Bytes) -> Result<Json<WebhookResponse>> {
    let payload = parse_payload(&body).map_err(|e| {
        error!("❌ Webhook error: {}", e);
        e
    })?;

    let record = SignalRecord::from_payload(&payload, Utc::now());
    let key = record.key();
    let message = format::alert_message(&record);
    state.cache.upsert(record);

    let sent = match state.notifier.send_message(&message).await {
        Ok(()) => true,
        Err(AppError::NoDestination) => {
            warn!("CHAT_ID not configured; alert for {} cached only", key);
            false
        }
        Err(e) => {
            error!("Failed to forward alert for {}: {}", key, e);
            false
        }
    };

    info!("✅ Signal stored for {} (sent: {})", key, sent);
    Ok(Json(WebhookResponse { status: "ok", sent }))
}

/// Decode the body. Only non-JSON or non-object bodies are rejected;
/// individual fields are never required.
fn parse_payload(body: &[u8]) -> Result<WebhookPayload> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| AppError::InvalidPayload(e.to_string()))?;

    if !value.is_object() {
        return Err(AppError::InvalidPayload("expected a JSON object".to_string()));
    }

    Ok(serde_json::from_value(value)?)
}
