//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind host: {0}")]
    InvalidBindAddress(String),

    #[error("CORS origins must be set explicitly in production")]
    PermissiveCorsInProduction,

    #[error("Invalid UI mount path: {0}")]
    InvalidMountPath(String),

    #[error("Chat height must be between {min} and {max} pixels")]
    InvalidChatHeight { min: u32, max: u32 },
}
