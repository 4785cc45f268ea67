//! HTTP handler for the liveness endpoint.

use axum::Json;

use super::dto::HealthResponse;

/// GET /health - Report that the process is up.
///
/// Does no I/O and touches no shared state, so it stays cheap under load
/// and never depends on downstream availability.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::OK)
}
