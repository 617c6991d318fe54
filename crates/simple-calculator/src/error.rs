//! Error types for the launcher
//!
//! Calculation errors never reach this type; they are shown in the result
//! label (see [`crate::core::CalcError`]).

use thiserror::Error;

/// Result type for launcher operations
pub type AppResult<T> = Result<T, AppError>;

/// Errors that can stop the application from starting or end it early
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Terminal I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML configuration could not be parsed or written
    #[error("Invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON configuration could not be parsed
    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// Logging could not be set up
    #[error("Logging setup failed: {message}")]
    Logging {
        /// Error message
        message: String,
    },
}

impl AppError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a logging error
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}
