//! HTTP middleware for axum.
//!
//! - `cors` - Cross-origin policy derived from `ServerConfig`

pub mod cors;

pub use cors::cors_layer;
