//! File entry and content hash types.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// BLAKE3 content hash for duplicate detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHash(pub [u8; 32]);

impl ContentHash {
    /// Create a new ContentHash from raw bytes.
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the hash as a hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A regular file observed during a scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// Full path to the file.
    pub path: PathBuf,
    /// File name (last path component).
    pub name: CompactString,
    /// Size in bytes.
    pub size: u64,
    /// Last modification time, if the platform reported one.
    pub modified: Option<SystemTime>,
}

impl FileEntry {
    /// Create a new file entry. The name is taken from the path.
    pub fn new(path: impl Into<PathBuf>, size: u64, modified: Option<SystemTime>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| CompactString::from(n.to_string_lossy()))
            .unwrap_or_default();
        Self {
            path,
            name,
            size,
            modified,
        }
    }

    /// Lowercase extension without the leading dot.
    pub fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
    }

    /// Category this file sorts into.
    pub fn category(&self) -> Category {
        Category::for_path(&self.path)
    }

    /// Borrow the path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
