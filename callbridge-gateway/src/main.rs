//! Entry point for the `callbridge-gateway` HTTP server.

use std::sync::Arc;

use callbridge_gateway::{config::GatewayConfig, routes::create_router, state::AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Loaded before the subscriber so `.env` can set RUST_LOG.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded environment file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "failed to load environment file"),
    }

    let config = GatewayConfig::from_env();
    config.log_missing();

    let state = Arc::new(AppState::from_config(&config));
    let app = create_router(state);

    let addr = config.listen_addr;
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %addr, "callbridge-gateway listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
