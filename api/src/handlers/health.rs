// Health check endpoint handler implementation

use axum::Json;
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}

/// Handler for GET /api/health - liveness probe without store access
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "Finance tracker API is running".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
