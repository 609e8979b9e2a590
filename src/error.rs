//! Error types for whatlies-extras operations.
//!
//! This module defines [`WhatliesError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `MissingDependency` is the only error a placeholder ever produces
//! - Use `anyhow::Error` (via `WhatliesError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for whatlies-extras operations.
#[derive(Debug, Error)]
pub enum WhatliesError {
    /// An optional backend was used without its install extra enabled.
    ///
    /// The message is the full, user-facing install instruction.
    #[error("{message}")]
    MissingDependency {
        tool: String,
        dependency_extra: String,
        message: String,
    },

    /// Integration name is not in the registry.
    #[error("Unknown integration: {name}")]
    UnknownIntegration { name: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WhatliesError {
    /// Whether this error came from using a placeholder.
    pub fn is_missing_dependency(&self) -> bool {
        matches!(self, WhatliesError::MissingDependency { .. })
    }
}

/// Result type alias for whatlies-extras operations.
pub type Result<T> = std::result::Result<T, WhatliesError>;
