//! Progress reporting types for cleanup operations.

use serde::{Deserialize, Serialize};

use crate::operation::{OperationError, OperationEvent};

/// The type of operation being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationType {
    /// Sort top-level files into category folders.
    Classify,
    /// Remove duplicate files.
    Dedupe,
    /// Remove files past the retention threshold.
    Sweep,
}

impl OperationType {
    /// Present-tense description used for the start line.
    pub fn verb_phrase(self) -> &'static str {
        match self {
            Self::Classify => "Sorting files",
            Self::Dedupe => "Removing duplicate files",
            Self::Sweep => "Removing old files",
        }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Classify => write!(f, "Classify"),
            Self::Dedupe => write!(f, "Dedupe"),
            Self::Sweep => write!(f, "Sweep"),
        }
    }
}

/// Receives progress events as an operation runs.
///
/// Events arrive synchronously, in processing order.
pub trait Reporter {
    /// Handle one event.
    fn report(&mut self, event: OperationEvent);
}

impl Reporter for Vec<OperationEvent> {
    fn report(&mut self, event: OperationEvent) {
        self.push(event);
    }
}

/// Count a per-file failure and pass it on to the reporter.
pub(crate) fn record_failure(
    progress: &mut OperationProgress,
    reporter: &mut dyn Reporter,
    error: OperationError,
) {
    progress.add_error(error.clone());
    reporter.report(OperationEvent::Failed(error));
}

/// Running tally for an operation in progress.
#[derive(Debug, Clone)]
pub struct OperationProgress {
    /// The type of operation.
    pub operation_type: OperationType,
    /// Number of files acted on successfully.
    pub files_completed: usize,
    /// Number of bytes moved or freed so far.
    pub bytes_processed: u64,
    /// Errors encountered so far.
    pub errors: Vec<OperationError>,
}

impl OperationProgress {
    /// Create a new progress tracker for an operation.
    pub fn new(operation_type: OperationType) -> Self {
        Self {
            operation_type,
            files_completed: 0,
            bytes_processed: 0,
            errors: Vec::new(),
        }
    }

    /// Check if the operation has any errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Add an error to the progress.
    pub fn add_error(&mut self, error: OperationError) {
        self.errors.push(error);
    }

    /// Increment the completed count and add bytes.
    pub fn complete_file(&mut self, bytes: u64) {
        self.files_completed += 1;
        self.bytes_processed += bytes;
    }

    /// Finish the operation.
    pub fn finish(self) -> OperationComplete {
        OperationComplete {
            operation_type: self.operation_type,
            succeeded: self.files_completed,
            failed: self.errors.len(),
            bytes_processed: self.bytes_processed,
            errors: self.errors,
        }
    }
}

/// Result of a completed operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationComplete {
    /// The type of operation.
    pub operation_type: OperationType,
    /// Number of files successfully processed.
    pub succeeded: usize,
    /// Number of files that failed.
    pub failed: usize,
    /// Total bytes moved or freed.
    pub bytes_processed: u64,
    /// Errors that occurred.
    pub errors: Vec<OperationError>,
}

impl OperationComplete {
    /// Check if the operation was fully successful.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Get a human-readable summary of the operation.
    pub fn summary(&self) -> String {
        let action = match self.operation_type {
            OperationType::Classify => "Moved",
            OperationType::Dedupe | OperationType::Sweep => "Removed",
        };

        if self.failed == 0 {
            format!("{} {} items", action, self.succeeded)
        } else {
            format!("{} {} items, {} failed", action, self.succeeded, self.failed)
        }
    }
}
