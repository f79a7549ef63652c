//! User handlers

use crate::error::ApiError;
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use fullstack_core::{CreatedUser, NewUser, User};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users.list_users().await?;
    Ok(Json(users))
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<NewUser>,
) -> Result<(StatusCode, Json<CreatedUser>), ApiError> {
    let created = state.users.create_user(req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
