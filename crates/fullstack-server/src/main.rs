//! Full Stack API Server binary
//!
//! Connects to MySQL and Redis, then serves the HTTP API. Exits with status 1
//! if either connection cannot be established.

use anyhow::{Context, Result};
use fullstack_core::ApiSettings;
use fullstack_server::{router, AppState};
use std::net::SocketAddr;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Full Stack API v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Failed to initialize: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let settings = ApiSettings::load().context("Failed to load configuration")?;
    info!(
        "Config loaded: db={}:{}/{}, redis={}:{}, port={}",
        settings.db_host,
        settings.db_port,
        settings.db_name,
        settings.redis_host,
        settings.redis_port,
        settings.port
    );

    let state = AppState::connect(&settings).await?;
    let app = router(state);

    let addr: SocketAddr = settings
        .bind_address()
        .parse()
        .context("Failed to parse bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("API server running on port {}", settings.port);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
