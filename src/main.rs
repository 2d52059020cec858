use signal_relay::bot::{CommandListener, QueryHandler};
use signal_relay::config::Config;
use signal_relay::AppState;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "signal_relay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    if config.telegram.chat_id.is_none() {
        warn!("CHAT_ID not set; webhook alerts will be cached but not forwarded");
    }

    let state = AppState::new(config.clone())?;

    // Start the command listener
    let listener_task = if config.telegram.polling {
        let handler = QueryHandler::new(state.cache.clone());
        let listener = CommandListener::new(state.notifier.clone(), handler, &config.telegram);
        info!("🤖 Telegram bot running...");
        Some(listener.start())
    } else {
        info!("Telegram polling disabled");
        None
    };

    let app = signal_relay::app(state);

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🚀 Server running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(task) = listener_task {
        task.abort();
    }
    info!("Shut down");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
