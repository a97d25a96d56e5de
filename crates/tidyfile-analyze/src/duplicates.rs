//! Duplicate file detection using content hashing.
//!
//! Files are hashed one at a time in the order given. The first file seen
//! with a digest becomes the canonical copy; every later file with the same
//! digest is a duplicate of it. Nothing is deleted here, the caller executes
//! the returned plan once the whole list has been hashed.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use tidyfile_core::{ContentHash, FileEntry};

use crate::hash::{DEFAULT_CHUNK_SIZE, hash_file};

/// Configuration for duplicate detection.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct DuplicateConfig {
    /// Number of bytes read per hashing step.
    #[builder(default = "DEFAULT_CHUNK_SIZE")]
    pub chunk_size: usize,
}

impl Default for DuplicateConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl DuplicateConfig {
    /// Create a new config builder.
    pub fn builder() -> DuplicateConfigBuilder {
        DuplicateConfigBuilder::default()
    }
}

/// A file whose content matches an earlier file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Duplicate {
    /// The duplicate to remove.
    pub path: PathBuf,
    /// The canonical file it matched.
    pub original: PathBuf,
    /// Shared content hash.
    pub hash: ContentHash,
    /// Size in bytes.
    pub size: u64,
}

/// A file that could not be hashed and was left out of the digest table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashFailure {
    /// The unreadable file.
    pub path: PathBuf,
    /// Human-readable cause.
    pub message: String,
}

/// Outcome of a duplicate scan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DuplicatePlan {
    /// One path per distinct content, in first-seen order.
    pub canonical: Vec<PathBuf>,
    /// Files to delete, in the order they were found.
    pub duplicates: Vec<Duplicate>,
    /// Files skipped because they could not be read.
    pub failures: Vec<HashFailure>,
    /// Number of files successfully hashed.
    pub files_hashed: u64,
    /// Bytes read while hashing.
    pub bytes_hashed: u64,
}

impl DuplicatePlan {
    /// Check if any duplicates were found.
    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }

    /// Space freed if every duplicate is removed.
    pub fn reclaimable_bytes(&self) -> u64 {
        self.duplicates.iter().map(|d| d.size).sum()
    }

    /// Duplicates that matched a given canonical file.
    pub fn duplicates_of<'a>(&'a self, original: &'a Path) -> impl Iterator<Item = &'a Duplicate> {
        self.duplicates
            .iter()
            .filter(move |d| d.original.as_path() == original)
    }
}

/// Duplicate file finder.
pub struct DuplicateFinder {
    config: DuplicateConfig,
}

impl DuplicateFinder {
    /// Create a new duplicate finder with default config.
    pub fn new() -> Self {
        Self {
            config: DuplicateConfig::default(),
        }
    }

    /// Create a new duplicate finder with custom config.
    pub fn with_config(config: DuplicateConfig) -> Self {
        Self { config }
    }

    /// Build a duplicate plan over `files`, treating their order as traversal order.
    pub fn find_duplicates(&self, files: &[FileEntry]) -> DuplicatePlan {
        let mut seen: HashMap<ContentHash, PathBuf> = HashMap::with_capacity(files.len());
        let mut plan = DuplicatePlan::default();

        for file in files {
            let hash = match hash_file(&file.path, self.config.chunk_size) {
                Ok(h) => h,
                Err(err) => {
                    warn!(path = %file.path.display(), error = %err.source, "hash failed");
                    plan.failures.push(HashFailure {
                        path: file.path.clone(),
                        message: err.source.to_string(),
                    });
                    continue;
                }
            };

            plan.files_hashed += 1;
            plan.bytes_hashed += file.size;

            match seen.get(&hash) {
                Some(original) => {
                    debug!(
                        path = %file.path.display(),
                        original = %original.display(),
                        "duplicate"
                    );
                    plan.duplicates.push(Duplicate {
                        path: file.path.clone(),
                        original: original.clone(),
                        hash,
                        size: file.size,
                    });
                }
                None => {
                    seen.insert(hash, file.path.clone());
                    plan.canonical.push(file.path.clone());
                }
            }
        }

        plan
    }
}

impl Default for DuplicateFinder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn entry(path: &Path) -> FileEntry {
        let size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        FileEntry::new(path, size, None)
    }

    #[test]
    fn test_first_seen_is_canonical() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("x.txt"), "same").unwrap();
        fs::write(root.join("y.txt"), "same").unwrap();

        let files = vec![entry(&root.join("y.txt")), entry(&root.join("x.txt"))];
        let plan = DuplicateFinder::new().find_duplicates(&files);

        assert_eq!(plan.canonical, vec![root.join("y.txt")]);
        assert_eq!(plan.duplicates.len(), 1);
        assert_eq!(plan.duplicates[0].path, root.join("x.txt"));
        assert_eq!(plan.duplicates[0].original, root.join("y.txt"));
    }

    #[test]
    fn test_unreadable_file_is_excluded() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("a.txt"), "same").unwrap();

        let files = vec![
            FileEntry::new(root.join("gone.txt"), 4, None),
            entry(&root.join("a.txt")),
        ];
        let plan = DuplicateFinder::new().find_duplicates(&files);

        assert_eq!(plan.failures.len(), 1);
        assert_eq!(plan.failures[0].path, root.join("gone.txt"));
        assert_eq!(plan.canonical, vec![root.join("a.txt")]);
        assert!(!plan.has_duplicates());
        assert_eq!(plan.files_hashed, 1);
    }

    #[test]
    fn test_reclaimable_bytes() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        for name in ["a", "b", "c"] {
            fs::write(root.join(name), "0123456789").unwrap();
        }

        let files: Vec<_> = ["a", "b", "c"].iter().map(|n| entry(&root.join(n))).collect();
        let plan = DuplicateFinder::new().find_duplicates(&files);

        assert_eq!(plan.reclaimable_bytes(), 20);
        assert_eq!(plan.duplicates_of(&root.join("a")).count(), 2);
    }
}
