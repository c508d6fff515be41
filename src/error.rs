// src/error.rs

//! Unified error handling for the blog engine.

use thiserror::Error;

/// Result type alias for blog engine operations.
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

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Catalog could not be loaded or decoded
    #[error("Catalog error for {location}: {message}")]
    Catalog { location: String, message: String },

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Video metadata lookup failed
    #[error("Video lookup error: {0}")]
    Video(String),

    /// Requested article does not exist
    #[error("Article not found: {0}")]
    ArticleNotFound(u64),
}

impl AppError {
    /// Create a catalog error with source context.
    pub fn catalog(location: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Catalog {
            location: location.into(),
            message: message.to_string(),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a video lookup error.
    pub fn video(message: impl Into<String>) -> Self {
        Self::Video(message.into())
    }
}
