//! Liveness probe.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: &'static str,
    pub timestamp: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "Resume generation service is running",
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
