//! Domain error types
//!
//! This module defines the error hierarchy for Tabmask.
//! Errors never carry cell values, only headers, paths and counts.

use thiserror::Error;

/// Main Tabmask error type
///
/// Value-level problems (a malformed email, an unparseable date) are never
/// errors; every transform has a passthrough fallback. These variants cover
/// configuration, record shape and I/O around the engine.
#[derive(Debug, Error)]
pub enum MaskError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Record shape and input validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Audit trail errors
    #[error("Audit error: {0}")]
    Audit(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl MaskError {
    /// Process exit code the CLI uses for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Configuration(_) => 2,
            Self::Validation(_) | Self::Csv(_) => 3,
            Self::Io(_) | Self::Serialization(_) | Self::Audit(_) | Self::Other(_) => 5,
        }
    }
}

impl From<std::io::Error> for MaskError {
    fn from(err: std::io::Error) -> Self {
        MaskError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MaskError {
    fn from(err: serde_json::Error) -> Self {
        MaskError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for MaskError {
    fn from(err: toml::de::Error) -> Self {
        MaskError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<csv::Error> for MaskError {
    fn from(err: csv::Error) -> Self {
        MaskError::Csv(err.to_string())
    }
}
