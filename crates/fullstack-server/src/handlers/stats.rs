//! Stats handler

use crate::error::ApiError;
use crate::AppState;
use axum::{extract::State, Json};
use fullstack_core::StatsReport;

pub async fn get(State(state): State<AppState>) -> Result<Json<StatsReport>, ApiError> {
    let report = state.stats.get_stats().await?;
    Ok(Json(report))
}
