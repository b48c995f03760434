//! Error types for the API configuration inspector
//!
//! Errors are grouped by the component that produces them. Note that the
//! cookie authentication check itself is total and has no error type: an
//! absent configuration is a valid "not enabled" answer.

use std::path::PathBuf;
use thiserror::Error;

use crate::api::validation::ValidationIssue;

/// Errors loading an API configuration document
#[derive(Error, Debug)]
pub enum LoadError {
    /// Document does not exist
    #[error("API configuration not found: {path}")]
    NotFound { path: PathBuf },

    /// I/O error reading the document
    #[error("Failed to read API configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON or unexpected schema
    #[error("Invalid API configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tool configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Explicitly requested configuration file not found
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Invalid configuration format
    #[error("Invalid configuration format")]
    InvalidFormat(#[from] toml::de::Error),

    /// Failed reading the configuration file
    #[error("Failed to read configuration file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    /// One or more error-level issues were found
    #[error("API configuration validation failed with {} error(s)", issues.len())]
    Failed { issues: Vec<ValidationIssue> },
}

/// Top-level application error that can represent any error type
#[derive(Error, Debug)]
pub enum AppError {
    /// API configuration loading error
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Tool configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Generic application error with context
    #[error("Application error: {message}")]
    Generic { message: String },
}

impl AppError {
    /// Create a generic application error with a message
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Load(_) => "load",
            AppError::Config(_) => "config",
            AppError::Validation(_) => "validation",
            AppError::Generic { .. } => "generic",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Loader result type alias
pub type LoadResult<T> = std::result::Result<T, LoadError>;

/// Tool configuration result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
