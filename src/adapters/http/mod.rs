//! HTTP adapters - the gateway and its endpoints.
//!
//! - `health` - Liveness endpoint
//! - `ui` - Mounted chat interface
//! - `middleware` - Gateway-wide layers
//! - `gateway` - Composition of the served application

pub mod gateway;
pub mod health;
pub mod middleware;
pub mod ui;

// Re-export key types for convenience
pub use gateway::{build_base_app, mount_ui, with_gateway_layers};
pub use health::health_routes;
pub use ui::ChatInterface;
