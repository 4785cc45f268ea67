//! HTTP adapter for the liveness endpoint.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::HealthResponse;
pub use routes::{health_routes, HEALTH_PATH};
