//! Diagnostics facility for recordlog
//!
//! recordlog is itself a logging façade, but its internals report what
//! they do through `tracing` like any other library. This crate owns the
//! subscriber side:
//! - Single initialization point via `init(profile)`
//! - Test capture mode for deterministic assertions on diagnostic events
//!
//! # Usage
//!
//! ```rust
//! use recordlog_logging::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
