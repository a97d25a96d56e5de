//! Delete files past the retention threshold.

use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use tidyfile_analyze::RetentionPolicy;
use tidyfile_core::CleanError;
use tidyfile_scan::FileWalker;

use crate::move_op::remove_file;
use crate::operation::{FileAction, OperationError, OperationEvent, Removal};
use crate::progress::{OperationComplete, OperationProgress, OperationType, Reporter, record_failure};

/// Deletes files last modified more than N days before the sweep starts.
///
/// Directories are never removed, even when a sweep empties them.
#[derive(Debug, Clone)]
pub struct RetentionSweeper {
    walker: FileWalker,
    max_age_days: u32,
    reference_time: Option<SystemTime>,
}

impl RetentionSweeper {
    /// Create a sweeper for the given threshold in days.
    pub fn new(max_age_days: u32) -> Self {
        Self {
            walker: FileWalker::new(),
            max_age_days,
            reference_time: None,
        }
    }

    /// Use a configured walker.
    pub fn with_walker(mut self, walker: FileWalker) -> Self {
        self.walker = walker;
        self
    }

    /// Measure ages from a fixed instant instead of the sweep start.
    pub fn with_reference_time(mut self, reference_time: SystemTime) -> Self {
        self.reference_time = Some(reference_time);
        self
    }

    /// Threshold in days.
    pub fn max_age_days(&self) -> u32 {
        self.max_age_days
    }

    /// Sweep every file under `root`.
    pub fn run(
        &self,
        root: &Path,
        reporter: &mut dyn Reporter,
    ) -> Result<OperationComplete, CleanError> {
        reporter.report(OperationEvent::Started {
            operation: OperationType::Sweep,
            retention_days: Some(self.max_age_days),
        });

        let policy = RetentionPolicy {
            max_age_days: self.max_age_days,
            reference_time: self.reference_time.unwrap_or_else(SystemTime::now),
        };
        let cutoff = policy.cutoff();
        info!(
            root = %root.display(),
            days = self.max_age_days,
            cutoff = %format_timestamp(cutoff),
            "sweeping old files"
        );

        let scan = self.walker.walk_files(root)?;
        let plan = policy.evaluate(&scan.files);
        debug!(
            expired = plan.expired.len(),
            retained = plan.retained,
            undated = plan.undated.len(),
            "retention evaluated"
        );

        let mut progress = OperationProgress::new(OperationType::Sweep);

        for warning in &scan.warnings {
            record_failure(&mut progress, reporter, OperationError::from_warning(warning));
        }

        for path in &plan.undated {
            record_failure(
                &mut progress,
                reporter,
                OperationError::new(path, FileAction::Stat, "modification time unavailable"),
            );
        }

        for file in plan.expired {
            let Some(modified) = file.modified else {
                continue;
            };

            match remove_file(&file.path, file.size) {
                Ok(bytes) => {
                    debug!(
                        path = %file.path.display(),
                        modified = %format_timestamp(modified),
                        "removed old file"
                    );
                    progress.complete_file(bytes);
                    reporter.report(OperationEvent::Removed {
                        path: file.path,
                        reason: Removal::Expired { modified },
                    });
                }
                Err(e) => {
                    warn!(path = %file.path.display(), error = %e, "remove failed");
                    record_failure(
                        &mut progress,
                        reporter,
                        OperationError::new(&file.path, FileAction::Remove, e.to_string()),
                    );
                }
            }
        }

        let complete = progress.finish();
        info!(
            removed = complete.succeeded,
            failed = complete.failed,
            freed = complete.bytes_processed,
            "sweep finished"
        );
        reporter.report(OperationEvent::Finished(complete.clone()));
        Ok(complete)
    }
}

fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
