//! Remove byte-identical duplicates.

use std::path::Path;

use tracing::{debug, info, warn};

use tidyfile_analyze::{DuplicateConfig, DuplicateFinder};
use tidyfile_core::CleanError;
use tidyfile_scan::FileWalker;

use crate::move_op::remove_file;
use crate::operation::{FileAction, OperationError, OperationEvent, Removal};
use crate::progress::{OperationComplete, OperationProgress, OperationType, Reporter, record_failure};

/// Deletes every file whose content matches a file seen earlier in the tree.
///
/// The whole tree is hashed before anything is deleted.
#[derive(Debug, Clone, Default)]
pub struct Deduplicator {
    walker: FileWalker,
    config: DuplicateConfig,
}

impl Deduplicator {
    /// Create a deduplicator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deduplicator using a configured walker.
    pub fn with_walker(walker: FileWalker) -> Self {
        Self {
            walker,
            config: DuplicateConfig::default(),
        }
    }

    /// Set the hashing configuration.
    pub fn with_config(mut self, config: DuplicateConfig) -> Self {
        self.config = config;
        self
    }

    /// Remove duplicates anywhere under `root`.
    pub fn run(
        &self,
        root: &Path,
        reporter: &mut dyn Reporter,
    ) -> Result<OperationComplete, CleanError> {
        reporter.report(OperationEvent::Started {
            operation: OperationType::Dedupe,
            retention_days: None,
        });

        let scan = self.walker.walk_files(root)?;
        info!(root = %root.display(), files = scan.files.len(), "hashing files");

        let plan = DuplicateFinder::with_config(self.config.clone()).find_duplicates(&scan.files);
        debug!(
            hashed = plan.files_hashed,
            bytes = plan.bytes_hashed,
            unique = plan.canonical.len(),
            duplicates = plan.duplicates.len(),
            "hashing finished"
        );

        let mut progress = OperationProgress::new(OperationType::Dedupe);

        for warning in &scan.warnings {
            record_failure(&mut progress, reporter, OperationError::from_warning(warning));
        }

        for failure in &plan.failures {
            record_failure(
                &mut progress,
                reporter,
                OperationError::new(&failure.path, FileAction::Read, failure.message.clone()),
            );
        }

        for dup in plan.duplicates {
            match remove_file(&dup.path, dup.size) {
                Ok(bytes) => {
                    debug!(path = %dup.path.display(), original = %dup.original.display(), hash = %dup.hash, "removed duplicate");
                    progress.complete_file(bytes);
                    reporter.report(OperationEvent::Removed {
                        path: dup.path,
                        reason: Removal::Duplicate {
                            original: dup.original,
                        },
                    });
                }
                Err(e) => {
                    warn!(path = %dup.path.display(), error = %e, "remove failed");
                    record_failure(
                        &mut progress,
                        reporter,
                        OperationError::new(&dup.path, FileAction::Remove, e.to_string()),
                    );
                }
            }
        }

        let complete = progress.finish();
        info!(
            removed = complete.succeeded,
            failed = complete.failed,
            freed = complete.bytes_processed,
            "duplicate removal finished"
        );
        reporter.report(OperationEvent::Finished(complete.clone()));
        Ok(complete)
    }
}
