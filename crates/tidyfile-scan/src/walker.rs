//! JWalk-based serial directory walker.

use std::path::Path;
use std::time::{Duration, Instant};

use jwalk::{Parallelism, WalkDir};
use tracing::debug;

use tidyfile_core::{CleanConfig, CleanError, FileEntry, ScanWarning, WarningKind};

/// Files found by a walk plus anything that could not be read.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Regular files, in deterministic order.
    pub files: Vec<FileEntry>,
    /// Entries that could not be read.
    pub warnings: Vec<ScanWarning>,
    /// Number of directories visited (excluding the root).
    pub dirs_visited: u64,
    /// Time taken by the walk.
    pub duration: Duration,
}

impl ScanResult {
    /// Total size of all files found.
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }

    /// Check if any entries could not be read.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Directory walker yielding regular files in a reproducible order.
#[derive(Debug, Clone)]
pub struct FileWalker {
    include_hidden: bool,
    follow_symlinks: bool,
}

impl FileWalker {
    /// Create a walker that includes hidden files and does not follow symlinks.
    pub fn new() -> Self {
        Self {
            include_hidden: true,
            follow_symlinks: false,
        }
    }

    /// Create a walker from the run configuration.
    pub fn from_config(config: &CleanConfig) -> Self {
        Self {
            include_hidden: config.include_hidden,
            follow_symlinks: config.follow_symlinks,
        }
    }

    /// Set whether hidden files are included.
    pub fn include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Set whether symbolic links are followed.
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// List the regular files directly inside `root`, sorted by name.
    ///
    /// Subdirectories are neither returned nor descended into.
    pub fn list_top_level(&self, root: &Path) -> Result<ScanResult, CleanError> {
        let mut result = self.walk(root, Some(1))?;
        result.files.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }

    /// Recursively collect every regular file under `root`, sorted by full path.
    pub fn walk_files(&self, root: &Path) -> Result<ScanResult, CleanError> {
        let mut result = self.walk(root, None)?;
        result.files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(result)
    }

    fn walk(&self, root: &Path, max_depth: Option<usize>) -> Result<ScanResult, CleanError> {
        let start = Instant::now();
        ensure_directory(root)?;

        let walker = WalkDir::new(root)
            .parallelism(Parallelism::Serial)
            .sort(true)
            .skip_hidden(!self.include_hidden)
            .follow_links(self.follow_symlinks)
            .min_depth(1)
            .max_depth(max_depth.unwrap_or(usize::MAX));

        let mut result = ScanResult::default();

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
                    debug!(path = %path.display(), error = %err, "unreadable entry");
                    result
                        .warnings
                        .push(ScanWarning::new(path, err.to_string(), WarningKind::ReadError));
                    continue;
                }
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                result.dirs_visited += 1;
                continue;
            }
            if !file_type.is_file() {
                continue;
            }

            let path = entry.path();
            let metadata = match entry.metadata() {
                Ok(m) => m,
                Err(err) => {
                    debug!(path = %path.display(), error = %err, "metadata unavailable");
                    result
                        .warnings
                        .push(ScanWarning::new(&path, err.to_string(), WarningKind::MetadataError));
                    continue;
                }
            };

            result
                .files
                .push(FileEntry::new(path, metadata.len(), metadata.modified().ok()));
        }

        result.duration = start.elapsed();
        debug!(
            root = %root.display(),
            files = result.files.len(),
            dirs = result.dirs_visited,
            warnings = result.warnings.len(),
            "walk finished"
        );
        Ok(result)
    }
}

impl Default for FileWalker {
    fn default() -> Self {
        Self::new()
    }
}

/// Verify that `root` exists and is a directory.
pub fn ensure_directory(root: &Path) -> Result<(), CleanError> {
    let metadata = std::fs::metadata(root).map_err(|e| CleanError::io(root, e))?;
    if !metadata.is_dir() {
        return Err(CleanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }
    Ok(())
}
