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
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Data directory must not be empty")]
    EmptyDataDir,

    #[error("Invalid webhook URL for channel '{0}': must start with http:// or https://")]
    InvalidWebhookUrl(&'static str),

    #[error("Notify timeout must be between 1 and 120 seconds")]
    InvalidTimeout,

    #[error("Submission source label must not be empty")]
    EmptySource,
}
