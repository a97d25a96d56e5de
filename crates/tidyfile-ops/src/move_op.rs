//! Single-file move and delete primitives.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

/// Move a single regular file to `dest`.
///
/// An existing file at `dest` is replaced. An existing directory at `dest`
/// is an error. Returns the number of bytes moved.
pub(crate) fn move_file(source: &Path, dest: &Path) -> io::Result<u64> {
    let size = fs::metadata(source)?.len();

    if dest.is_dir() {
        return Err(io::Error::new(
            ErrorKind::AlreadyExists,
            format!("a directory named {} already exists", dest.display()),
        ));
    }

    // Try rename first (fast path for same filesystem)
    match fs::rename(source, dest) {
        Ok(()) => return Ok(size),
        Err(e) if e.kind() == ErrorKind::CrossesDevices => {}
        Err(e) => return Err(e),
    }

    // Fall back to copy + delete for cross-filesystem moves
    fs::copy(source, dest)?;
    if let Err(e) = fs::remove_file(source) {
        let _ = fs::remove_file(dest);
        return Err(e);
    }

    Ok(size)
}

/// Delete a single file, returning the bytes freed.
pub(crate) fn remove_file(path: &Path, size: u64) -> io::Result<u64> {
    fs::remove_file(path)?;
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_move_file() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("a.txt");
        let dest = temp.path().join("b.txt");
        fs::write(&src, "hello").unwrap();

        let bytes = move_file(&src, &dest).unwrap();

        assert_eq!(bytes, 5);
        assert!(!src.exists());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "hello");
    }

    #[test]
    fn test_move_replaces_existing_file() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("new.txt");
        let dest = temp.path().join("old.txt");
        fs::write(&src, "new").unwrap();
        fs::write(&dest, "old").unwrap();

        move_file(&src, &dest).unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }

    #[test]
    fn test_move_onto_directory_fails() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("a.txt");
        let dest = temp.path().join("taken");
        fs::write(&src, "x").unwrap();
        fs::create_dir(&dest).unwrap();

        let err = move_file(&src, &dest).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert!(src.exists());
    }

    #[test]
    fn test_remove_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = remove_file(&temp.path().join("missing"), 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
