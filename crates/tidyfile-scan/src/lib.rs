//! Directory enumeration for tidyfile.
//!
//! Walks a root directory with jwalk and returns its regular files in a
//! deterministic order. Two shapes of walk are provided:
//!
//! - **Top-level listing** of the direct children of the root, sorted by name
//! - **Recursive walk** of the whole tree, sorted by full path
//!
//! Traversal is serial. Entries that cannot be read are collected as
//! [`ScanWarning`]s instead of aborting the walk.
//!
//! # Example
//!
//! ```rust,no_run
//! use tidyfile_scan::FileWalker;
//!
//! let walker = FileWalker::new();
//! let scan = walker.walk_files("/path/to/clean".as_ref()).unwrap();
//!
//! for file in &scan.files {
//!     println!("{} ({} bytes)", file.path.display(), file.size);
//! }
//! ```

mod walker;

pub use walker::{ensure_directory, FileWalker, ScanResult};

// Re-export core types for convenience
pub use tidyfile_core::{CleanError, FileEntry, ScanWarning, WarningKind};
