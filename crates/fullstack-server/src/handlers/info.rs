//! API info handler

use axum::Json;
use fullstack_core::ApiInfo;

pub const API_NAME: &str = "Full Stack API";
pub const API_VERSION: &str = "1.0.0";

pub const ENDPOINTS: [&str; 4] = [
    "GET /health - Health check",
    "GET /users - List users",
    "POST /users - Create user",
    "GET /stats - Get statistics (cached)",
];

pub async fn index() -> Json<ApiInfo> {
    Json(ApiInfo {
        name: API_NAME.to_string(),
        version: API_VERSION.to_string(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}
