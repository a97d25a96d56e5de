//! Cleanup operations for tidyfile.
//!
//! This crate performs the filesystem changes: sorting top-level files into
//! category folders, deleting duplicates and deleting files past a retention
//! threshold. Each operation streams [`OperationEvent`]s to a [`Reporter`] as
//! it goes and returns an [`OperationComplete`] summary.
//!
//! A failure on one file is reported and skipped; only an unusable root
//! aborts an operation.
//!
//! ```rust,no_run
//! use tidyfile_core::CleanConfig;
//! use tidyfile_ops::{Housekeeper, OperationEvent};
//!
//! let config = CleanConfig::new("/home/me/Desktop").with_sort().with_dedupe();
//! let mut events: Vec<OperationEvent> = Vec::new();
//! let report = Housekeeper::new(config).run(&mut events).unwrap();
//!
//! for event in &events {
//!     println!("{event}");
//! }
//! println!("{} failures", report.total_failed());
//! ```

mod classify;
mod dedupe;
mod executor;
mod move_op;
mod operation;
mod progress;
mod sweep;

pub use classify::Classifier;
pub use dedupe::Deduplicator;
pub use executor::{Housekeeper, RunReport};
pub use operation::{FileAction, OperationError, OperationEvent, Removal};
pub use progress::{OperationComplete, OperationProgress, OperationType, Reporter};
pub use sweep::RetentionSweeper;

// Re-export core types for convenience
pub use tidyfile_core::{Category, CleanConfig, CleanError, Selection};
