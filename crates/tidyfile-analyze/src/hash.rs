//! Streaming BLAKE3 content hashing.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use blake3::Hasher;
use thiserror::Error;

use tidyfile_core::ContentHash;

/// Default read size for hashing.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// A file could not be opened or read while hashing.
#[derive(Debug, Error)]
#[error("Error reading file {}: {source}", path.display())]
pub struct HashError {
    /// File being hashed.
    pub path: PathBuf,
    /// Underlying I/O failure.
    #[source]
    pub source: std::io::Error,
}

/// Compute the BLAKE3 hash of a file, reading `chunk_size` bytes at a time.
///
/// The file handle is closed before this returns.
pub fn hash_file(path: &Path, chunk_size: usize) -> Result<ContentHash, HashError> {
    let to_err = |source| HashError {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(to_err)?;
    hash_reader(file, chunk_size).map_err(to_err)
}

/// Compute the BLAKE3 hash of everything `reader` yields.
pub fn hash_reader<R: Read>(mut reader: R, chunk_size: usize) -> std::io::Result<ContentHash> {
    let mut hasher = Hasher::new();
    let mut buffer = vec![0u8; chunk_size.max(1)];

    loop {
        let bytes_read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(ContentHash::new(*hasher.finalize().as_bytes()))
}
