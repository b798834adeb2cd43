use recordlog::{Formatter, LogError, LogRecord, Result};

/// Renders a record as a YAML mapping, keys in record order
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn format(&self, record: &LogRecord) -> Result<String> {
        serde_yaml::to_string(record).map_err(|e| LogError::serialization(e.to_string()))
    }
}
