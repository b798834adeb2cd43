//! Core types shared across recordlog crates
//!
//! This crate provides the foundational types used by the logging
//! pipeline, the error facility and the diagnostics facility:
//!
//! - **Severity**: `Level`, the severity attached to every record
//! - **Schema constants**: canonical record keys, defaults and
//!   diagnostic event names

pub mod level;
pub mod schema;

pub use level::Level;
