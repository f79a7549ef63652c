//! Response bodies for the informational and health endpoints

use serde::{Deserialize, Serialize};

/// `GET /` body of the api service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiInfo {
    pub name: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

/// Healthy `GET /health` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub database: String,
    pub cache: String,
    pub timestamp: String,
}

/// Unhealthy `GET /health` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnhealthyReport {
    pub status: String,
    pub error: String,
}

/// Generic failure body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
