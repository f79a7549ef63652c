//! HTTP error mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fullstack_core::{ErrorBody, FullstackError};

/// Handler-boundary error: always a 500 carrying the underlying message
#[derive(Debug)]
pub struct ApiError(FullstackError);

impl From<FullstackError> for ApiError {
    fn from(e: FullstackError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: self.0.message(),
            }),
        )
            .into_response()
    }
}
