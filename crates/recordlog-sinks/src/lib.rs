//! Optional formatters and transports for recordlog
//!
//! Nothing in the core depends on this crate. Its types plug into
//! [`recordlog::LoggerConfig`] like any caller-supplied override:
//!
//! - [`YamlFormatter`]: records as YAML documents
//! - [`FileAppendTransport`]: one append-only file per level

pub mod file;
pub mod yaml;

pub use file::FileAppendTransport;
pub use yaml::YamlFormatter;
