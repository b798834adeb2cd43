//! Declarative logger settings
//!
//! Settings name built-in formatters and transports instead of holding
//! them, so they can come from a TOML file:
//!
//! ```toml
//! root = "driver"
//! format = "json"
//! transport = "stdout"
//! ```
//!
//! Unknown keys are ignored. Unknown names, and values that are not
//! strings, leave the default in place.

use crate::format::{Formatter, JsonColorFormatter, JsonFormatter};
use crate::logger::{Logger, LoggerConfig};
use crate::transport::{StdoutTransport, Transport};
use recordlog_core_types::schema::EVENT_OVERRIDE_IGNORED;
use recordlog_errors::{LogError, Result};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerSettings {
    #[serde(deserialize_with = "string_or_ignore")]
    pub root: Option<String>,
    #[serde(deserialize_with = "string_or_ignore")]
    pub format: Option<String>,
    #[serde(deserialize_with = "string_or_ignore")]
    pub transport: Option<String>,
}

/// Accept any TOML value; anything but a string counts as unset
fn string_or_ignore<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match toml::Value::deserialize(deserializer)? {
        toml::Value::String(s) => Ok(Some(s)),
        other => {
            tracing::debug!(
                component = module_path!(),
                op = "settings",
                event = EVENT_OVERRIDE_IGNORED,
                value_type = other.type_str(),
            );
            Ok(None)
        }
    }
}

impl LoggerSettings {
    /// Parse settings from TOML text
    ///
    /// # Errors
    ///
    /// Returns a config error when the text is not valid TOML. Known keys
    /// with non-string values are ignored, not rejected.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| LogError::config(e.to_string()))
    }

    /// Resolve names into a [`LoggerConfig`]
    pub fn into_config(self) -> LoggerConfig {
        LoggerConfig {
            root: self.root,
            format: self.format.as_deref().and_then(builtin_format),
            transport: self.transport.as_deref().and_then(builtin_transport),
        }
    }

    pub fn build(self) -> Logger {
        Logger::new(self.into_config())
    }
}

fn builtin_format(name: &str) -> Option<Box<dyn Formatter>> {
    match name {
        "json-color" => Some(Box::new(JsonColorFormatter)),
        "json" => Some(Box::new(JsonFormatter)),
        _ => {
            tracing::debug!(
                component = module_path!(),
                op = "settings",
                event = EVENT_OVERRIDE_IGNORED,
                slot = "format",
                override_name = name,
            );
            None
        }
    }
}

fn builtin_transport(name: &str) -> Option<Box<dyn Transport>> {
    match name {
        "stdout" => Some(Box::new(StdoutTransport)),
        _ => {
            tracing::debug!(
                component = module_path!(),
                op = "settings",
                event = EVENT_OVERRIDE_IGNORED,
                slot = "transport",
                override_name = name,
            );
            None
        }
    }
}
