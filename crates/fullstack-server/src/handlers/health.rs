//! Health check handler

use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fullstack_core::ports::HealthProbe;
use fullstack_core::{HealthReport, Result, UnhealthyReport};
use tracing::warn;

/// Probe the database, then the cache. Either failing makes the service
/// unhealthy; nothing is retried.
pub async fn health(State(state): State<AppState>) -> Response {
    match probe(&state).await {
        Ok(()) => Json(HealthReport {
            status: "healthy".to_string(),
            database: "connected".to_string(),
            cache: "connected".to_string(),
            timestamp: super::timestamp(),
        })
        .into_response(),
        Err(e) => {
            warn!("Health check failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(UnhealthyReport {
                    status: "unhealthy".to_string(),
                    error: e.message(),
                }),
            )
                .into_response()
        }
    }
}

async fn probe(state: &AppState) -> Result<()> {
    state.db.ping().await?;
    state.cache.ping().await?;
    Ok(())
}
