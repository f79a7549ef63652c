//! Hello Server
//!
//! Minimal HTTP service whose only job is to show environment-driven
//! configuration inside a container.

use axum::{extract::State, response::Html, routing::get, Json, Router};
use chrono::{SecondsFormat, Utc};
use fullstack_core::HelloSettings;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct HelloState {
    pub settings: Arc<HelloSettings>,
    pub started_at: Instant,
}

impl HelloState {
    pub fn new(settings: HelloSettings) -> Self {
        Self {
            settings: Arc::new(settings),
            started_at: Instant::now(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    app_name: String,
    version: &'static str,
    environment: String,
    uptime_seconds: f64,
    timestamp: String,
}

pub fn router(state: HelloState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/status", get(status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

async fn index(State(state): State<HelloState>) -> Html<String> {
    let settings = &state.settings;
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{name}</title>
    <style>
        body {{ font-family: Arial, sans-serif; max-width: 800px; margin: 50px auto; padding: 20px; background: #f5f5f5; }}
        .container {{ background: white; padding: 30px; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }}
        h1 {{ color: #b7410e; }}
        code {{ background: #e9ecef; padding: 2px 8px; border-radius: 4px; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>{name}</h1>
        <p>Welcome! This Rust app is running inside a Docker container.</p>
        <h2>Available Endpoints:</h2>
        <ul>
            <li><code>GET /</code> - This page</li>
            <li><code>GET /health</code> - Health check</li>
            <li><code>GET /api/status</code> - API status (JSON)</li>
        </ul>
        <h2>Environment:</h2>
        <ul>
            <li>Version: {version}</li>
            <li>Port: {port}</li>
            <li>Environment: {environment}</li>
        </ul>
    </div>
</body>
</html>
"#,
        name = settings.app_name,
        version = env!("CARGO_PKG_VERSION"),
        port = settings.port,
        environment = settings.environment,
    ))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: timestamp(),
    })
}

async fn status(State(state): State<HelloState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        app_name: state.settings.app_name.clone(),
        version: env!("CARGO_PKG_VERSION"),
        environment: state.settings.environment.clone(),
        uptime_seconds: state.started_at.elapsed().as_secs_f64(),
        timestamp: timestamp(),
    })
}
