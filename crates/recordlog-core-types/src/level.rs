//! Severity levels
//!
//! The four recognized severities are `info`, `warning`, `error` and
//! `debug`. Any other string is kept verbatim as [`Level::Other`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Severity attached to a log record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Level {
    #[default]
    Info,
    Warning,
    Error,
    Debug,
    /// Unrecognized level string, carried through unchanged
    Other(String),
}

impl Level {
    /// Get the wire representation used in records
    pub fn as_str(&self) -> &str {
        match self {
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Debug => "debug",
            Level::Other(s) => s,
        }
    }
}

impl From<&str> for Level {
    fn from(s: &str) -> Self {
        match s {
            "info" => Level::Info,
            "warning" => Level::Warning,
            "error" => Level::Error,
            "debug" => Level::Debug,
            other => Level::Other(other.to_string()),
        }
    }
}

impl From<String> for Level {
    fn from(s: String) -> Self {
        match Level::from(s.as_str()) {
            Level::Other(_) => Level::Other(s),
            known => known,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Level::from)
    }
}
