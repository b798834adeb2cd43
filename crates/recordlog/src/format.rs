//! Formatters: record → string

use crate::record::LogRecord;
use recordlog_core_types::schema::FIELD_LEVEL;
use recordlog_core_types::Level;
use recordlog_errors::Result;
use serde_json::Value;

/// Renders a record into the string handed to the transport
///
/// Any `Fn(&LogRecord) -> Result<String>` closure is a formatter.
pub trait Formatter: Send + Sync {
    /// # Errors
    ///
    /// Implementation-defined; the logger returns it to its caller as-is.
    fn format(&self, record: &LogRecord) -> Result<String>;
}

impl<F> Formatter for F
where
    F: Fn(&LogRecord) -> Result<String> + Send + Sync,
{
    fn format(&self, record: &LogRecord) -> Result<String> {
        self(record)
    }
}

/// ANSI foreground colors used by [`JsonColorFormatter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Yellow,
    Blue,
    Green,
}

impl Color {
    /// Resets the foreground color only
    pub const CLOSE: &'static str = "\x1b[39m";

    /// Pick the color for a severity; anything unrecognized is green
    pub fn for_level(level: &Level) -> Self {
        match level {
            Level::Error => Color::Red,
            Level::Warning => Color::Yellow,
            Level::Debug => Color::Blue,
            Level::Info | Level::Other(_) => Color::Green,
        }
    }

    pub fn open(&self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[34m",
            Color::Green => "\x1b[32m",
        }
    }

    pub fn paint(&self, text: &str) -> String {
        format!("{}{}{}", self.open(), text, Self::CLOSE)
    }
}

/// Compact JSON, no styling
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, record: &LogRecord) -> Result<String> {
        Ok(serde_json::to_string(record)?)
    }
}

/// Default formatter: compact JSON wrapped in a color picked by `level`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonColorFormatter;

impl Formatter for JsonColorFormatter {
    fn format(&self, record: &LogRecord) -> Result<String> {
        let text = JsonFormatter.format(record)?;
        let level = record
            .get(FIELD_LEVEL)
            .and_then(Value::as_str)
            .map(Level::from)
            .unwrap_or_default();

        Ok(Color::for_level(&level).paint(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const RED: (&str, &str) = ("\u{1b}[31m", "\u{1b}[39m");
    const YELLOW: (&str, &str) = ("\u{1b}[33m", "\u{1b}[39m");
    const BLUE: (&str, &str) = ("\u{1b}[34m", "\u{1b}[39m");
    const GREEN: (&str, &str) = ("\u{1b}[32m", "\u{1b}[39m");

    fn record_with_level(level: &str) -> LogRecord {
        match json!({"level": level, "message": "some error message"}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn assert_wrapped(output: &str, (open, close): (&str, &str)) {
        assert!(output.starts_with(open), "{output:?} should start with {open:?}");
        assert!(output.ends_with(close), "{output:?} should end with {close:?}");
    }

    #[test]
    fn test_color_markers_per_level() {
        let formatter = JsonColorFormatter;

        assert_wrapped(&formatter.format(&record_with_level("error")).unwrap(), RED);
        assert_wrapped(&formatter.format(&record_with_level("warning")).unwrap(), YELLOW);
        assert_wrapped(&formatter.format(&record_with_level("debug")).unwrap(), BLUE);
        assert_wrapped(&formatter.format(&record_with_level("info")).unwrap(), GREEN);
        assert_wrapped(
            &formatter.format(&record_with_level("anything else")).unwrap(),
            GREEN,
        );
    }

    #[test]
    fn test_missing_level_is_green() {
        let record = LogRecord::new();
        assert_wrapped(&JsonColorFormatter.format(&record).unwrap(), GREEN);
    }

    #[test]
    fn test_color_wraps_exact_json() {
        let record = record_with_level("error");
        let plain = JsonFormatter.format(&record).unwrap();
        let colored = JsonColorFormatter.format(&record).unwrap();

        assert_eq!(colored, format!("{}{}{}", RED.0, plain, RED.1));
    }

    #[test]
    fn test_json_formatter_preserves_key_order() {
        let record = record_with_level("info");
        assert_eq!(
            JsonFormatter.format(&record).unwrap(),
            r#"{"level":"info","message":"some error message"}"#
        );
    }

    #[test]
    fn test_closure_is_a_formatter() {
        let formatter = |_: &LogRecord| -> Result<String> { Ok("formatted!".to_string()) };
        assert_eq!(formatter.format(&LogRecord::new()).unwrap(), "formatted!");
    }
}
