//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe that returns 200 OK when the process is running.
//! Used by Kubernetes, ECS, systemd, and load balancers to verify the service is alive.

use axum::Json;
use serde::Serialize;

use crate::config::HEALTH_STATUS;

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Health check handler.
///
/// This is a liveness probe - it only checks that the process can respond to HTTP.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTH_STATUS.to_string(),
    })
}
