//! Signal Relay - TradingView alerts to Telegram with a latest-signal cache

pub mod api;
pub mod bot;
pub mod config;
pub mod error;
pub mod services;
pub mod types;

use axum::Router;
use config::Config;
use services::{Notifier, SignalCache};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub cache: Arc<SignalCache>,
    pub notifier: Arc<Notifier>,
}

impl AppState {
    /// Build the state with an empty cache.
    pub fn new(config: Config) -> error::Result<Self> {
        let notifier = Arc::new(Notifier::new(&config.telegram)?);
        Ok(Self {
            config: Arc::new(config),
            cache: SignalCache::new(),
            notifier,
        })
    }
}

/// Build the HTTP application.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(api::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Re-export commonly used types
pub use types::*;
