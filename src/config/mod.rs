//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DOC_QA` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a working
//! development setup.
//!
//! # Example
//!
//! ```no_run
//! use doc_qa_agent::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let (host, port) = config.server.bind_addr();
//! println!("Server running on {host}:{port}");
//! ```

mod error;
mod server;
mod ui;

pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use ui::UiConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Chat UI configuration (mount path, texts, layout)
    #[serde(default)]
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DOC_QA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DOC_QA__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `DOC_QA__UI__MOUNT_PATH=/chat` -> `ui.mount_path = "/chat"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DOC_QA")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ui.validate()?;
        Ok(())
    }
}
