//! Canonical schema constants for records and diagnostics
//!
//! These constants keep record keys consistent between the pipeline,
//! the formatters and the tests.

// Record keys
pub const FIELD_ROOT: &str = "root";
pub const FIELD_MESSAGE: &str = "message";
pub const FIELD_LEVEL: &str = "level";

// Defaults
pub const DEFAULT_ROOT: &str = "root";

// Diagnostic field keys
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";

// Diagnostic event names
pub const EVENT_DISPATCH: &str = "dispatch";
pub const EVENT_OVERRIDE_IGNORED: &str = "override_ignored";
