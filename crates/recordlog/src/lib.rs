//! recordlog - a small structured-logging façade
//!
//! Every call to [`Logger::log`] runs the same three steps:
//! - build a [`LogRecord`] from the caller's data, the configured root and
//!   the severity level
//! - render it to a string through a [`Formatter`]
//! - hand the string and its level to a [`Transport`]
//!
//! Both the formatter and the transport are replaceable at construction.
//! Anything left unset falls back to [`JsonColorFormatter`] and
//! [`StdoutTransport`].
//!
//! ```rust
//! use recordlog::{Level, Logger, LoggerConfig};
//!
//! let logger = Logger::new(LoggerConfig::new().with_root("driver"));
//! logger.log("starting the app", None).unwrap();
//! logger.log("an error occured", Level::Error).unwrap();
//! ```

pub mod format;
pub mod logger;
pub mod record;
pub mod settings;
pub mod transport;

pub use format::{Color, Formatter, JsonColorFormatter, JsonFormatter};
pub use logger::{Logger, LoggerConfig};
pub use record::{build_record, LogData, LogRecord};
pub use recordlog_core_types::Level;
pub use recordlog_errors::{ErrorKind, LogError, Result};
pub use settings::LoggerSettings;
pub use transport::{StdoutTransport, Transport, WriterTransport};
