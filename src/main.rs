//! Doc QA Agent server binary.
//!
//! Loads configuration from the environment, composes the gateway and
//! serves it until Ctrl-C. For auto-reload during development run it under
//! a file watcher (e.g. `cargo watch -x run`).

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use doc_qa_agent::adapters::http::{build_base_app, mount_ui, with_gateway_layers, ChatInterface};
use doc_qa_agent::adapters::EchoConversationHandler;
use doc_qa_agent::config::{AppConfig, ServerConfig};
use doc_qa_agent::ports::ConversationHandler;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.server.environment,
        "starting doc-qa-agent"
    );
    if config.server.allows_any_origin() {
        info!("CORS allows every origin; set DOC_QA__SERVER__CORS_ORIGINS to restrict");
    }

    let conversation: Arc<dyn ConversationHandler> = Arc::new(EchoConversationHandler::new());
    let ui = ChatInterface::from_config(conversation, &config.ui);

    let app = build_base_app();
    let app = mount_ui(app, ui, &config.ui.mount_path);
    let app = with_gateway_layers(app, &config.server);

    let listener = tokio::net::TcpListener::bind(config.server.bind_addr()).await?;
    info!(addr = %listener.local_addr()?, ui = %config.ui.mount_path, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

/// Installs the global subscriber. `RUST_LOG` overrides the configured filter.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if server.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
