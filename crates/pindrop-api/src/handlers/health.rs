//! Health check handlers
//!
//! Endpoints for liveness and readiness probes, and the API root.

use axum::{extract::State, http::StatusCode, Json};
use pindrop_service::dto::{HealthResponse, ReadinessResponse};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /api/v0
pub async fn index() -> Json<Value> {
    Json(json!({ "message": "this is pin-drop" }))
}

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness check with dependency health
///
/// GET /health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let db_healthy = state.service_context().pool().acquire().await.is_ok();

    let redis_healthy = state
        .service_context()
        .redis_pool()
        .health_check()
        .await
        .is_ok();

    let response = ReadinessResponse::ready(db_healthy, redis_healthy);
    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
