//! Error types for the curriculum workspace.
//!
//! Library crates use [`CurriculumError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all curriculum operations.
#[derive(Debug, thiserror::Error)]
pub enum CurriculumError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Data validation error (bad table data, invalid format, etc.).
    #[error("validation error: {message}")]
    Validation { message: String },

    /// A qualification level key outside the closed set.
    #[error("unknown qualification level '{0}'")]
    UnknownLevel(String),

    /// A subject key outside the closed set.
    #[error("unknown subject '{0}'")]
    UnknownSubject(String),

    /// A valid level/subject pair that the level does not teach.
    #[error("{level} does not offer {subject}")]
    NotOffered { level: String, subject: String },

    /// JSON/TOML serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, CurriculumError>;

impl CurriculumError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether a routing layer should answer this error with "not found".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UnknownLevel(_) | Self::UnknownSubject(_) | Self::NotOffered { .. }
        )
    }
}
