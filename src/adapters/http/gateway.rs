//! Gateway composition.
//!
//! The served application is built in explicit steps, each returning a new
//! router:
//!
//! ```text
//! build_base_app()                 -> /health
//!   |> mount_ui(app, ui, "/ui")    -> + /ui, /ui/api/chat
//!   |> with_gateway_layers(app, s) -> + CORS, request tracing
//! ```
//!
//! Layers go on last so they cover the mounted UI as well.

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::health::health_routes;
use super::middleware::cors_layer;
use super::ui::ChatInterface;

/// Builds the base application: liveness endpoint only.
pub fn build_base_app() -> Router {
    health_routes()
}

/// Returns `app` with `ui` served under `path`.
pub fn mount_ui(app: Router, ui: ChatInterface, path: &str) -> Router {
    tracing::debug!("Mounting chat UI at {}", path);
    app.merge(ui.into_router(path))
}

/// Wraps the composed application in the gateway-wide layers.
pub fn with_gateway_layers(app: Router, server: &ServerConfig) -> Router {
    app.layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::conversation::EchoConversationHandler;
    use crate::config::UiConfig;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn echo_ui() -> ChatInterface {
        ChatInterface::new(Arc::new(EchoConversationHandler::new()))
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn base_app_has_no_ui() {
        let response = build_base_app().oneshot(get("/ui")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn mounted_app_serves_health_and_ui() {
        let app = mount_ui(build_base_app(), echo_ui(), "/ui");

        let health = app.clone().oneshot(get("/health")).await.unwrap();
        assert_eq!(health.status(), StatusCode::OK);

        let ui = app.oneshot(get("/ui")).await.unwrap();
        assert_eq!(ui.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn ui_can_be_mounted_on_custom_path() {
        let app = mount_ui(build_base_app(), echo_ui(), "/app/chat");

        let response = app.clone().oneshot(get("/app/chat")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get("/ui")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn every_valid_mount_path_can_be_mounted() {
        for path in ["/ui", "/app/chat", "/doc-qa/v1.0"] {
            let config = UiConfig {
                mount_path: path.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_ok());

            let app = mount_ui(build_base_app(), echo_ui(), &config.mount_path);
            let response = app.oneshot(get(&format!("{path}/"))).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "GET {path}/");
        }
    }

    #[tokio::test]
    async fn gateway_layers_cover_mounted_ui() {
        let app = with_gateway_layers(
            mount_ui(build_base_app(), echo_ui(), "/ui"),
            &ServerConfig::default(),
        );

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/ui")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5173"
        );
    }
}
