//! Error types for cleanup runs.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that abort a cleanup run before any operation starts.
///
/// Per-file failures are never surfaced through this type; they are reported
/// and skipped by the operation that hit them.
#[derive(Debug, Error)]
pub enum CleanError {
    /// Root path does not exist.
    #[error("Path {} does not exist.", path.display())]
    NotFound { path: PathBuf },

    /// Permission denied for the root path.
    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    /// Root path exists but is not a directory.
    #[error("Path {} is not a directory.", path.display())]
    NotADirectory { path: PathBuf },

    /// Generic I/O error on the root path.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl CleanError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}

/// Kind of scan warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// Permission was denied.
    PermissionDenied,
    /// Error reading a directory entry.
    ReadError,
    /// Error reading metadata.
    MetadataError,
}

/// Non-fatal problem encountered while walking a tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanWarning {
    /// Path where the warning occurred.
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
    /// Kind of warning.
    pub kind: WarningKind,
}

impl ScanWarning {
    /// Create a new scan warning.
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }

    /// Create a warning from an I/O error, classifying permission failures.
    pub fn from_io(path: impl Into<PathBuf>, error: &std::io::Error, kind: WarningKind) -> Self {
        let kind = if error.kind() == std::io::ErrorKind::PermissionDenied {
            WarningKind::PermissionDenied
        } else {
            kind
        };
        Self::new(path, error.to_string(), kind)
    }
}
