//! Runs the selected operations against one root.

use tracing::info;

use tidyfile_analyze::DuplicateConfig;
use tidyfile_core::{CleanConfig, CleanError};
use tidyfile_scan::{FileWalker, ensure_directory};

use crate::classify::Classifier;
use crate::dedupe::Deduplicator;
use crate::progress::{OperationComplete, Reporter};
use crate::sweep::RetentionSweeper;

/// Results of every operation a run performed, in execution order.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// One entry per operation that ran.
    pub operations: Vec<OperationComplete>,
}

impl RunReport {
    /// Total per-file failures across all operations.
    pub fn total_failed(&self) -> usize {
        self.operations.iter().map(|o| o.failed).sum()
    }

    /// Check if every operation completed without per-file failures.
    pub fn is_success(&self) -> bool {
        self.operations.iter().all(|o| o.is_success())
    }
}

/// Validates the root and runs sort, dedupe and sweep in that order.
#[derive(Debug, Clone)]
pub struct Housekeeper {
    config: CleanConfig,
    duplicate_config: DuplicateConfig,
}

impl Housekeeper {
    /// Create a housekeeper for a run configuration.
    pub fn new(config: CleanConfig) -> Self {
        Self {
            config,
            duplicate_config: DuplicateConfig::default(),
        }
    }

    /// Set the hashing configuration used by the dedupe pass.
    pub fn with_duplicate_config(mut self, config: DuplicateConfig) -> Self {
        self.duplicate_config = config;
        self
    }

    /// The run configuration.
    pub fn config(&self) -> &CleanConfig {
        &self.config
    }

    /// Run every selected operation.
    ///
    /// Fails only if the root is missing or unusable, in which case nothing
    /// is touched. Per-file failures are reported and counted instead.
    pub fn run(&self, reporter: &mut dyn Reporter) -> Result<RunReport, CleanError> {
        let root = self.config.root.as_path();
        let selection = self.config.selection;

        if selection.retention_days == Some(0) {
            return Err(CleanError::InvalidConfig {
                message: "Retention threshold must be at least one day".to_string(),
            });
        }
        ensure_directory(root)?;

        let walker = FileWalker::from_config(&self.config);
        let mut report = RunReport::default();

        if selection.sort {
            let complete = Classifier::with_walker(walker.clone()).run(root, reporter)?;
            report.operations.push(complete);
        }

        if selection.dedupe {
            let complete = Deduplicator::with_walker(walker.clone())
                .with_config(self.duplicate_config.clone())
                .run(root, reporter)?;
            report.operations.push(complete);
        }

        if let Some(days) = selection.retention_days {
            let complete = RetentionSweeper::new(days)
                .with_walker(walker)
                .run(root, reporter)?;
            report.operations.push(complete);
        }

        info!(
            root = %root.display(),
            operations = report.operations.len(),
            failed = report.total_failed(),
            "run finished"
        );
        Ok(report)
    }
}
