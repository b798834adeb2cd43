//! Error facility for recordlog
//!
//! The pipeline itself raises almost nothing: invalid overrides fall back
//! to defaults, and failures inside a formatter or transport are returned
//! to the caller of `log` unchanged. This crate gives those failures a
//! stable classification.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using LogError
pub type Result<T> = std::result::Result<T, LogError>;

/// Canonical error kind taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A formatter could not render a record
    Format,
    /// A transport refused or failed to deliver a message
    Transport,
    Io,
    Serialization,
    /// Settings could not be parsed
    Config,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Format => "ERR_FORMAT",
            ErrorKind::Transport => "ERR_TRANSPORT",
            ErrorKind::Io => "ERR_IO",
            ErrorKind::Serialization => "ERR_SERIALIZATION",
            ErrorKind::Config => "ERR_CONFIG",
        }
    }
}

/// Errors surfaced by formatters, transports and settings loading
#[derive(Error, Debug)]
pub enum LogError {
    /// Formatter failure raised by an override
    #[error("format failed: {message}")]
    Format { message: String },

    /// Transport failure raised by an override
    #[error("transport failed: {message}")]
    Transport { message: String },

    /// I/O failure while writing to a sink
    #[error("I/O error{}: {source}", path_suffix(.path))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization failure
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Serialization failure in a non-JSON formatter
    #[error("serialization failed: {message}")]
    Serialization { message: String },

    /// Settings text could not be parsed
    #[error("invalid logger settings: {message}")]
    Config { message: String },
}

impl LogError {
    pub fn format(message: impl Into<String>) -> Self {
        LogError::Format {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        LogError::Transport {
            message: message.into(),
        }
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        LogError::Serialization {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        LogError::Config {
            message: message.into(),
        }
    }

    /// Wrap an I/O error, optionally tagged with the path involved
    pub fn io(source: std::io::Error, path: Option<PathBuf>) -> Self {
        LogError::Io { path, source }
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            LogError::Format { .. } => ErrorKind::Format,
            LogError::Transport { .. } => ErrorKind::Transport,
            LogError::Io { .. } => ErrorKind::Io,
            LogError::Json(_) | LogError::Serialization { .. } => ErrorKind::Serialization,
            LogError::Config { .. } => ErrorKind::Config,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" on {}", p.display()))
        .unwrap_or_default()
}

impl From<std::io::Error> for LogError {
    fn from(source: std::io::Error) -> Self {
        LogError::io(source, None)
    }
}
