//! Analysis passes for tidyfile.
//!
//! This crate decides *what* should happen to scanned files without touching
//! the filesystem beyond reading:
//!
//! - **Content hashing** - Stream a file through BLAKE3 in fixed-size chunks
//! - **Duplicate planning** - First-seen-wins digest table over an ordered file list
//! - **Retention** - Compare modification times against a `now - N days` cutoff
//!
//! # Duplicate Planning
//!
//! ```rust,ignore
//! use tidyfile_analyze::DuplicateFinder;
//! use tidyfile_scan::FileWalker;
//!
//! let scan = FileWalker::new().walk_files("/path/to/clean".as_ref()).unwrap();
//! let plan = DuplicateFinder::new().find_duplicates(&scan.files);
//!
//! for dup in &plan.duplicates {
//!     println!("{} duplicates {}", dup.path.display(), dup.original.display());
//! }
//! ```
//!
//! # Retention
//!
//! ```rust,ignore
//! use tidyfile_analyze::RetentionPolicy;
//!
//! let policy = RetentionPolicy::new(30);
//! let plan = policy.evaluate(&scan.files);
//! println!("{} files older than 30 days", plan.expired.len());
//! ```

mod duplicates;
mod hash;
pub mod retention;

pub use duplicates::{
    Duplicate, DuplicateConfig, DuplicateConfigBuilder, DuplicateFinder, DuplicatePlan,
    HashFailure,
};
pub use hash::{DEFAULT_CHUNK_SIZE, HashError, hash_file, hash_reader};
pub use retention::{RetentionPlan, RetentionPolicy, RetentionPolicyBuilder};

// Re-export core types
pub use tidyfile_core::{ContentHash, FileEntry};
