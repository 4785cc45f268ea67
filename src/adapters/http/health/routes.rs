//! Axum routes for the liveness endpoint.

use axum::routing::get;
use axum::Router;

use super::handlers::health_check;

/// Path of the liveness endpoint.
pub const HEALTH_PATH: &str = "/health";

/// Creates the liveness route.
///
/// - GET /health - `{"status":"ok"}`
pub fn health_routes() -> Router {
    Router::new().route(HEALTH_PATH, get(health_check))
}
