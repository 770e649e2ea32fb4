//! Liveness check handler.
use axum::Json;

use crate::lib::service::{check_health, HealthStatus};

/// `GET /health` → `200 {"status":"ok"}`.
pub async fn handler() -> Json<HealthStatus> {
    Json(check_health())
}
