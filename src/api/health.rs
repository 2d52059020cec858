use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

const LIVENESS_TEXT: &str = concat!("✅ Crypto Signal Bot v", env!("CARGO_PKG_VERSION"), " Online");

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    cached_signals: usize,
}

async fn liveness() -> &'static str {
    LIVENESS_TEXT
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        cached_signals: state.cache.len(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(liveness))
        .route("/api/health", get(health))
}
