// src/error.rs

//! Unified error handling for the library portal.

use std::fmt;

use thiserror::Error;

/// Result type alias for portal operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Failed to fetch {url}: {status}")]
    Status { url: String, status: String },

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Required columns could not be resolved from a sheet header
    #[error("Unresolved required fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },

    /// CMS content could not be loaded
    #[error("Content error for {kind}: {message}")]
    Content { kind: String, message: String },
}

impl AppError {
    /// Create an HTTP status error.
    pub fn status(url: impl Into<String>, status: impl fmt::Display) -> Self {
        Self::Status {
            url: url.into(),
            status: status.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a content error with the content kind as context.
    pub fn content(kind: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Content {
            kind: kind.into(),
            message: message.to_string(),
        }
    }
}
