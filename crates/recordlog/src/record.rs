//! Record construction
//!
//! A record is an ordered string-keyed map built fresh for every call.
//! Merge order is: configured root, then caller data, then level. The
//! configured root and the resolved level always win over caller keys of
//! the same name; `root` stays the first key.

use recordlog_core_types::schema::{FIELD_LEVEL, FIELD_MESSAGE, FIELD_ROOT};
use recordlog_core_types::Level;
use serde_json::{Map, Value};

/// A normalized log record
pub type LogRecord = Map<String, Value>;

/// Caller-supplied payload of a log call
#[derive(Debug, Clone, PartialEq)]
pub enum LogData {
    /// Plain text, stored under the `message` key
    Message(String),
    /// Key/value pairs merged into the record as-is
    Fields(Map<String, Value>),
}

impl From<&str> for LogData {
    fn from(message: &str) -> Self {
        LogData::Message(message.to_string())
    }
}

impl From<String> for LogData {
    fn from(message: String) -> Self {
        LogData::Message(message)
    }
}

impl From<Map<String, Value>> for LogData {
    fn from(fields: Map<String, Value>) -> Self {
        LogData::Fields(fields)
    }
}

/// Objects become fields and strings become messages. Other JSON values
/// carry no keys and contribute nothing to the record.
impl From<Value> for LogData {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(fields) => LogData::Fields(fields),
            Value::String(message) => LogData::Message(message),
            _ => LogData::Fields(Map::new()),
        }
    }
}

/// Build a record for `data` under `root`
///
/// `level` defaults to `info` when absent. The caller's map is moved into
/// the record rather than copied.
pub fn build_record(root: &str, data: LogData, level: Option<&Level>) -> LogRecord {
    let level = level.cloned().unwrap_or_default();

    let mut record = LogRecord::new();
    record.insert(FIELD_ROOT.to_string(), Value::String(root.to_string()));

    match data {
        LogData::Message(message) => {
            record.insert(FIELD_MESSAGE.to_string(), Value::String(message));
        }
        LogData::Fields(fields) => record.extend(fields),
    }

    record.insert(FIELD_LEVEL.to_string(), Value::String(level.to_string()));
    // a caller `root` key lands in the first slot; put the configured value back
    record.insert(FIELD_ROOT.to_string(), Value::String(root.to_string()));

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keys(record: &LogRecord) -> Vec<&str> {
        record.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_string_data_becomes_message() {
        let record = build_record("root", "this is my message text".into(), Some(&Level::Debug));
        assert_eq!(
            Value::Object(record),
            json!({"root": "root", "message": "this is my message text", "level": "debug"})
        );
    }

    #[test]
    fn test_level_defaults_to_info() {
        let record = build_record("root", "text".into(), None);
        assert_eq!(record.get("level"), Some(&json!("info")));
    }

    #[test]
    fn test_fields_are_merged_in_order() {
        let data = json!({"somekey": "some value", "anotherKey": "anotherValue"});
        let record = build_record("root", data.into(), Some(&Level::Debug));
        assert_eq!(keys(&record), ["root", "somekey", "anotherKey", "level"]);
    }

    #[test]
    fn test_caller_root_and_level_are_overwritten() {
        let data = json!({"level": "error", "root": "spoofed", "message": "m"});
        let record = build_record("driver", data.into(), Some(&Level::Warning));

        assert_eq!(record.get("root"), Some(&json!("driver")));
        assert_eq!(record.get("level"), Some(&json!("warning")));
        // root keeps the first slot, caller level keeps its own position
        assert_eq!(keys(&record), ["root", "level", "message"]);
    }

    #[test]
    fn test_unknown_level_is_written_verbatim() {
        let level = Level::from("anything else");
        let record = build_record("root", "x".into(), Some(&level));
        assert_eq!(record.get("level"), Some(&json!("anything else")));
    }

    #[test]
    fn test_non_object_values_contribute_nothing() {
        let record = build_record("root", json!(42).into(), None);
        assert_eq!(Value::Object(record), json!({"root": "root", "level": "info"}));
    }

    #[test]
    fn test_string_value_becomes_message() {
        assert_eq!(LogData::from(json!("hi")), LogData::Message("hi".to_string()));
    }
}
