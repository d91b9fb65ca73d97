//! Liveness probe.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthBody {
    status: &'static str,
}

/// `GET /health-check`
pub async fn check() -> Json<HealthBody> {
    Json(HealthBody {
        status: "server is running",
    })
}
