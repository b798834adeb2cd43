//! The logger: record construction → format → transport

use crate::format::{Formatter, JsonColorFormatter};
use crate::record::{build_record, LogData, LogRecord};
use crate::transport::{StdoutTransport, Transport};
use recordlog_core_types::schema::{DEFAULT_ROOT, EVENT_DISPATCH};
use recordlog_core_types::Level;
use recordlog_errors::Result;
use std::fmt;

/// Construction options for a [`Logger`]
///
/// Every field is optional. `None` keeps the built-in default; an empty
/// `root` counts as unset.
#[derive(Default)]
pub struct LoggerConfig {
    pub root: Option<String>,
    pub format: Option<Box<dyn Formatter>>,
    pub transport: Option<Box<dyn Transport>>,
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn with_format(mut self, format: impl Formatter + 'static) -> Self {
        self.format = Some(Box::new(format));
        self
    }

    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("root", &self.root)
            .field("format", &self.format.as_ref().map(|_| "custom"))
            .field("transport", &self.transport.as_ref().map(|_| "custom"))
            .finish()
    }
}

/// Structured logger with a fixed root, formatter and transport
///
/// All three are bound at construction and never change. The logger adds
/// no locking of its own; sharing it across threads is as safe as its
/// formatter and transport are.
pub struct Logger {
    root: String,
    formatter: Box<dyn Formatter>,
    transport: Box<dyn Transport>,
}

impl Logger {
    pub fn new(config: LoggerConfig) -> Self {
        let root = config
            .root
            .filter(|root| !root.is_empty())
            .unwrap_or_else(|| DEFAULT_ROOT.to_string());

        Self {
            root,
            formatter: config
                .format
                .unwrap_or_else(|| Box::new(JsonColorFormatter)),
            transport: config
                .transport
                .unwrap_or_else(|| Box::new(StdoutTransport)),
        }
    }

    /// Build, format and deliver one record
    ///
    /// `level` defaults to `info`. The transport receives the resolved
    /// level together with the formatted text.
    ///
    /// # Errors
    ///
    /// Returns whatever the formatter or transport returned, unchanged.
    pub fn log(&self, data: impl Into<LogData>, level: impl Into<Option<Level>>) -> Result<()> {
        let level = level.into().unwrap_or_default();
        let record = self.create_log_object(data, Some(&level));

        tracing::trace!(
            component = module_path!(),
            op = "log",
            event = EVENT_DISPATCH,
            root = %self.root,
            level = %level,
        );

        let message = self.formatter.format(&record)?;
        self.transport.send(&level, &message)
    }

    /// Build the record a `log` call would emit, without emitting it
    pub fn create_log_object(&self, data: impl Into<LogData>, level: Option<&Level>) -> LogRecord {
        build_record(&self.root, data.into(), level)
    }

    /// # Errors
    ///
    /// See [`Logger::log`].
    pub fn info(&self, data: impl Into<LogData>) -> Result<()> {
        self.log(data, Level::Info)
    }

    /// # Errors
    ///
    /// See [`Logger::log`].
    pub fn warning(&self, data: impl Into<LogData>) -> Result<()> {
        self.log(data, Level::Warning)
    }

    /// # Errors
    ///
    /// See [`Logger::log`].
    pub fn error(&self, data: impl Into<LogData>) -> Result<()> {
        self.log(data, Level::Error)
    }

    /// # Errors
    ///
    /// See [`Logger::log`].
    pub fn debug(&self, data: impl Into<LogData>) -> Result<()> {
        self.log(data, Level::Debug)
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn formatter(&self) -> &dyn Formatter {
        self.formatter.as_ref()
    }

    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("root", &self.root).finish_non_exhaustive()
    }
}
