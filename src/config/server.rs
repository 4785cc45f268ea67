//! Server configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to: an IP address or a hostname resolved at bind time
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Environment name
    #[serde(default = "default_environment")]
    pub environment: Environment,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines instead of human-readable text
    #[serde(default)]
    pub log_json: bool,

    /// CORS allowed origins (comma-separated). Unset means every origin.
    pub cors_origins: Option<String>,
}

/// Application environment
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl ServerConfig {
    /// Get the host and port to bind to
    ///
    /// Accepted by `tokio::net::TcpListener::bind`, which resolves
    /// hostnames such as `localhost`.
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }

    fn validate_host(&self) -> Result<(), ValidationError> {
        let host = self.host.as_str();
        let invalid = host.is_empty()
            || host
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, '/' | '@' | '?' | '#'));
        if invalid {
            return Err(ValidationError::InvalidBindAddress(host.to_string()));
        }
        Ok(())
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Get CORS origins as a vector
    ///
    /// Empty entries are dropped, so `"a,,b,"` yields two origins.
    pub fn cors_origins_list(&self) -> Vec<String> {
        self.cors_origins
            .as_ref()
            .map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// True when no allow-list narrows the CORS policy
    ///
    /// An explicit `*` entry counts as no allow-list.
    pub fn allows_any_origin(&self) -> bool {
        let origins = self.cors_origins_list();
        origins.is_empty() || origins.iter().any(|o| o == "*")
    }

    /// Validate server configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        self.validate_host()?;
        if self.is_production() && self.allows_any_origin() {
            return Err(ValidationError::PermissiveCorsInProduction);
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
            log_level: default_log_level(),
            log_json: false,
            cors_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_environment() -> Environment {
    Environment::Development
}

fn default_log_level() -> String {
    "info,doc_qa_agent=debug,tower_http=debug".to_string()
}
