//! Error types for hookd

use thiserror::Error;

/// Main error type for hookd
#[derive(Error, Debug)]
pub enum HookdError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Deployment command failed: {command}: {stderr}")]
    DeployError { command: String, stderr: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Shutdown error: {0}")]
    ShutdownError(String),
}
