//! Cross-origin policy for the gateway.
//!
//! Without configured origins every origin, method and header is accepted
//! and credentials are allowed. Browsers reject a literal `*` together with
//! credentials, so the request's own origin, method and headers are echoed
//! back instead. Setting `cors_origins` narrows the origin side to an
//! explicit allow-list; a `*` entry keeps the permissive policy.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::ServerConfig;

/// Builds the CORS layer described by `server.cors_origins`.
pub fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let allow_origin = if server.allows_any_origin() {
        AllowOrigin::mirror_request()
    } else {
        AllowOrigin::list(parse_origins(&server.cors_origins_list()))
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

fn parse_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect()
}
