//! # userstore API Server
//!
//! Serves the in-memory user store over HTTP.
//!
//! ## Usage
//!
//! ```bash
//! API_PORT=8080 LOG_FORMAT=json cargo run -p userstore-api
//! ```
//!
//! All records are lost when the process exits.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use userstore_api::{
    app::{build_router, AppState},
    config::Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env may carry RUST_LOG/LOG_FORMAT, so load it before the subscriber
    dotenvy::dotenv().ok();
    init_tracing();

    tracing::info!(
        "userstore API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;
    let addr = config.bind_address();

    let state = AppState::in_memory(config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "userstore_api=debug,userstore_shared=debug,tower_http=debug".into()
    });
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        // Without a signal handler, run until killed
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, exiting...");
}
