//! Sort top-level files into category folders.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use tidyfile_core::CleanError;
use tidyfile_scan::FileWalker;

use crate::move_op::move_file;
use crate::operation::{FileAction, OperationError, OperationEvent};
use crate::progress::{OperationComplete, OperationProgress, OperationType, Reporter, record_failure};

/// Moves each regular file directly under a root into `<root>/<Category>/`.
///
/// Only direct children are considered. Subdirectories, including category
/// folders from an earlier run, are left alone.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    walker: FileWalker,
}

impl Classifier {
    /// Create a classifier with the default walker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier using a configured walker.
    pub fn with_walker(walker: FileWalker) -> Self {
        Self { walker }
    }

    /// Classify the files directly under `root`.
    pub fn run(
        &self,
        root: &Path,
        reporter: &mut dyn Reporter,
    ) -> Result<OperationComplete, CleanError> {
        reporter.report(OperationEvent::Started {
            operation: OperationType::Classify,
            retention_days: None,
        });

        let scan = self.walker.list_top_level(root)?;
        info!(root = %root.display(), files = scan.files.len(), "sorting files");

        let mut progress = OperationProgress::new(OperationType::Classify);

        for warning in &scan.warnings {
            record_failure(&mut progress, reporter, OperationError::from_warning(warning));
        }

        for file in &scan.files {
            let Some(file_name) = file.path.file_name() else {
                continue;
            };

            let category = file.category();
            let dest_dir = root.join(category.dir_name());

            if let Err(e) = fs::create_dir_all(&dest_dir) {
                warn!(path = %file.path.display(), dir = %dest_dir.display(), error = %e, "cannot create category folder");
                record_failure(
                    &mut progress,
                    reporter,
                    OperationError::new(&file.path, FileAction::Move, e.to_string()),
                );
                continue;
            }

            let destination = dest_dir.join(file_name);
            match move_file(&file.path, &destination) {
                Ok(bytes) => {
                    debug!(path = %file.path.display(), %category, "moved");
                    progress.complete_file(bytes);
                    reporter.report(OperationEvent::Moved {
                        path: file.path.clone(),
                        destination,
                        category,
                    });
                }
                Err(e) => {
                    warn!(path = %file.path.display(), error = %e, "move failed");
                    record_failure(
                        &mut progress,
                        reporter,
                        OperationError::new(&file.path, FileAction::Move, e.to_string()),
                    );
                }
            }
        }

        let complete = progress.finish();
        info!(moved = complete.succeeded, failed = complete.failed, "sorting finished");
        reporter.report(OperationEvent::Finished(complete.clone()));
        Ok(complete)
    }
}
