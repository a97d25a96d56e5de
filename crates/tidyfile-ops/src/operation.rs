//! Per-file failures and report events.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use tidyfile_core::{Category, ScanWarning};

use crate::progress::{OperationComplete, OperationType};

/// The single-file action that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileAction {
    /// Listing or stat'ing an entry during the walk.
    Scan,
    /// Moving a file into its category folder.
    Move,
    /// Opening or reading a file for hashing.
    Read,
    /// Reading a file's modification time.
    Stat,
    /// Deleting a file.
    Remove,
}

/// An error that occurred while processing one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationError {
    /// The path that caused the error.
    pub path: PathBuf,
    /// What was being attempted.
    pub action: FileAction,
    /// A human-readable error message.
    pub message: String,
}

impl OperationError {
    /// Create a new operation error.
    pub fn new(path: impl Into<PathBuf>, action: FileAction, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            action,
            message: message.into(),
        }
    }

    /// Convert a walk warning.
    pub fn from_warning(warning: &ScanWarning) -> Self {
        Self::new(&warning.path, FileAction::Scan, warning.message.clone())
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

impl std::fmt::Display for OperationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.action {
            FileAction::Scan => write!(f, "Error scanning {}: {}", self.path.display(), self.message),
            FileAction::Move => write!(f, "Error moving {}: {}", self.file_name(), self.message),
            FileAction::Read => {
                write!(f, "Error reading file {}: {}", self.path.display(), self.message)
            }
            FileAction::Stat => {
                write!(f, "Error processing file {}: {}", self.path.display(), self.message)
            }
            FileAction::Remove => {
                write!(f, "Error removing file {}: {}", self.path.display(), self.message)
            }
        }
    }
}

/// Why a file was deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Removal {
    /// Content matched an earlier file.
    Duplicate { original: PathBuf },
    /// Last modified before the retention cutoff.
    Expired { modified: SystemTime },
}

/// One line of the progress stream.
#[derive(Debug, Clone)]
pub enum OperationEvent {
    /// An operation is starting.
    Started {
        operation: OperationType,
        /// Threshold in days, for the sweep.
        retention_days: Option<u32>,
    },
    /// A file was moved into a category folder.
    Moved {
        path: PathBuf,
        destination: PathBuf,
        category: Category,
    },
    /// A file was deleted.
    Removed { path: PathBuf, reason: Removal },
    /// A single file could not be processed and was skipped.
    Failed(OperationError),
    /// An operation finished.
    Finished(OperationComplete),
}

impl OperationEvent {
    /// Path the event is about, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Moved { path, .. } | Self::Removed { path, .. } => Some(path),
            Self::Failed(err) => Some(&err.path),
            Self::Started { .. } | Self::Finished(_) => None,
        }
    }

    /// Check if this event reports a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl std::fmt::Display for OperationEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Started {
                operation: OperationType::Sweep,
                retention_days: Some(days),
            } => write!(f, "Removing files older than {days} days..."),
            Self::Started { operation, .. } => write!(f, "{}...", operation.verb_phrase()),
            Self::Moved { path, category, .. } => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy())
                    .unwrap_or_default();
                write!(f, "Moved {name} to {category}")
            }
            Self::Removed {
                path,
                reason: Removal::Duplicate { .. },
            } => write!(f, "Removed duplicate file: {}", path.display()),
            Self::Removed {
                path,
                reason: Removal::Expired { .. },
            } => write!(f, "Deleted old file: {}", path.display()),
            Self::Failed(err) => write!(f, "{err}"),
            Self::Finished(complete) => write!(f, "{}", complete.summary()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_lines() {
        let err = OperationError::new("/d/photo.jpg", FileAction::Move, "denied");
        assert_eq!(err.to_string(), "Error moving photo.jpg: denied");

        let err = OperationError::new("/d/a.txt", FileAction::Read, "gone");
        assert_eq!(err.to_string(), "Error reading file /d/a.txt: gone");

        let err = OperationError::new("/d/a.txt", FileAction::Remove, "busy");
        assert_eq!(err.to_string(), "Error removing file /d/a.txt: busy");
    }

    #[test]
    fn test_event_lines() {
        let moved = OperationEvent::Moved {
            path: PathBuf::from("/d/a.jpg"),
            destination: PathBuf::from("/d/Images/a.jpg"),
            category: Category::Images,
        };
        assert_eq!(moved.to_string(), "Moved a.jpg to Images");
        assert_eq!(moved.path(), Some(Path::new("/d/a.jpg")));

        let removed = OperationEvent::Removed {
            path: PathBuf::from("/d/y.txt"),
            reason: Removal::Duplicate {
                original: PathBuf::from("/d/x.txt"),
            },
        };
        assert_eq!(removed.to_string(), "Removed duplicate file: /d/y.txt");

        let started = OperationEvent::Started {
            operation: OperationType::Sweep,
            retention_days: Some(30),
        };
        assert_eq!(started.to_string(), "Removing files older than 30 days...");

        let started = OperationEvent::Started {
            operation: OperationType::Classify,
            retention_days: None,
        };
        assert_eq!(started.to_string(), "Sorting files...");
        assert!(!started.is_failure());
    }
}
