//! Core types for tidyfile.
//!
//! This crate provides the data structures shared by the scanning, analysis
//! and operation crates: the run configuration, the static category table,
//! file entries, content hashes and error types.

mod category;
mod config;
mod entry;
mod error;

pub use category::Category;
pub use config::{CleanConfig, CleanConfigBuilder, Selection};
pub use entry::{ContentHash, FileEntry};
pub use error::{CleanError, ScanWarning, WarningKind};
