//! Health check handler

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::constants::SERVICE_NAME;

#[derive(Serialize)]
pub(super) struct HealthCheckResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Liveness only. The Gemini endpoint is not called, so health checks spend no quota.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthCheckResponse {
            status: "healthy",
            service: SERVICE_NAME,
        }),
    )
}
