//! Local stand-in for the Telegram Bot API.

#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use signal_relay::config::Config;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const TOKEN: &str = "123456:test-token";
pub const CHAT_ID: &str = "-1001234567890";

#[derive(Debug, Clone)]
pub struct Call {
    pub method: String,
    pub body: Value,
}

#[derive(Clone, Default)]
pub struct MockTelegram {
    calls: Arc<Mutex<Vec<Call>>>,
    updates: Arc<Mutex<Vec<Value>>>,
    fail_sends: Arc<AtomicBool>,
}

impl MockTelegram {
    /// Start the mock on an ephemeral port and return its base URL.
    pub async fn spawn(&self) -> String {
        let app = Router::new()
            .route("/*path", post(handle))
            .with_state(self.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }

    pub fn fail_sends(&self, fail: bool) {
        self.fail_sends.store(fail, Ordering::SeqCst);
    }

    /// Queue a raw update for the next `getUpdates` call.
    pub fn push_update(&self, update: Value) {
        self.updates.lock().unwrap().push(update);
    }

    pub fn calls(&self, method: &str) -> Vec<Call> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.method == method)
            .cloned()
            .collect()
    }

    pub fn sent_messages(&self) -> Vec<Call> {
        self.calls("sendMessage")
    }
}

async fn handle(
    State(mock): State<MockTelegram>,
    Path(path): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let path = path.trim_start_matches('/');
    let method = path.rsplit('/').next().unwrap_or_default().to_string();
    assert_eq!(path, format!("bot{}/{}", TOKEN, method));

    mock.calls.lock().unwrap().push(Call {
        method: method.clone(),
        body,
    });

    match method.as_str() {
        "sendMessage" if mock.fail_sends.load(Ordering::SeqCst) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: chat not found"
            })),
        ),
        "sendMessage" => (
            StatusCode::OK,
            Json(json!({ "ok": true, "result": { "message_id": 1 } })),
        ),
        "getUpdates" => {
            let updates = std::mem::take(&mut *mock.updates.lock().unwrap());
            (StatusCode::OK, Json(json!({ "ok": true, "result": updates })))
        }
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "ok": false, "error_code": 404, "description": "Not Found" })),
        ),
    }
}

/// Config pointing at the mock, with polling off.
pub fn test_config(api_url: &str, chat_id: Option<&str>) -> Config {
    let mut vars = HashMap::new();
    vars.insert("TELEGRAM_TOKEN", TOKEN.to_string());
    vars.insert("TELEGRAM_API_URL", api_url.to_string());
    vars.insert("TELEGRAM_POLLING", "false".to_string());
    vars.insert("POLL_TIMEOUT_SECS", "1".to_string());
    if let Some(chat_id) = chat_id {
        vars.insert("CHAT_ID", chat_id.to_string());
    }

    Config::from_lookup(|key| vars.get(key).cloned()).unwrap()
}

/// A text message update as Telegram delivers it.
pub fn text_update(update_id: i64, chat_id: i64, text: &str) -> Value {
    json!({
        "update_id": update_id,
        "message": {
            "message_id": update_id * 10,
            "from": { "id": 99, "is_bot": false, "first_name": "Trader" },
            "chat": { "id": chat_id, "type": "private" },
            "date": 1_700_000_000,
            "text": text
        }
    })
}
