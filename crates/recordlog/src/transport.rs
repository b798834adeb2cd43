//! Transports: deliver a rendered message to a sink

use recordlog_core_types::Level;
use recordlog_errors::{LogError, Result};
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// Delivers a formatted message
///
/// `level` is passed along so implementations can route by severity.
/// Any `Fn(&Level, &str) -> Result<()>` closure is a transport.
pub trait Transport: Send + Sync {
    /// # Errors
    ///
    /// Implementation-defined; the logger returns it to its caller as-is.
    fn send(&self, level: &Level, message: &str) -> Result<()>;
}

impl<F> Transport for F
where
    F: Fn(&Level, &str) -> Result<()> + Send + Sync,
{
    fn send(&self, level: &Level, message: &str) -> Result<()> {
        self(level, message)
    }
}

fn write_line<W: Write + ?Sized>(writer: &mut W, message: &str) -> Result<()> {
    writeln!(writer, "{}", message)?;
    writer.flush()?;
    Ok(())
}

/// Default transport: one line per message on standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutTransport;

impl Transport for StdoutTransport {
    fn send(&self, _level: &Level, message: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_line(&mut handle, message)
    }
}

/// Line-per-message transport over any writer
///
/// Writes from concurrent callers are serialized by an internal mutex.
#[derive(Debug)]
pub struct WriterTransport<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterTransport<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consume the transport and return the writer
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Transport for WriterTransport<W> {
    fn send(&self, _level: &Level, message: &str) -> Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| LogError::transport("writer lock poisoned"))?;
        write_line(&mut *writer, message)
    }
}
