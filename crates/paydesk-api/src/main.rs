//! # paydesk-api: Binary Entry Point
//!
//! Starts the Axum HTTP server for the Paydesk console.
//! Binds to configurable port (default 8080).

use paydesk_api::{AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("Configuration error: {e}");
        e
    })?;

    match &config.registry.state_file {
        Some(path) => tracing::info!("Persisting active platform to {}", path.display()),
        None => tracing::warn!("PAYDESK_STATE_FILE not set; active platform is kept in memory only"),
    }

    let port = config.port;
    let state = AppState::from_config(config)?;
    let app = paydesk_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Paydesk console listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
