use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use tidyfile_scan::FileWalker;

fn relative(root: &std::path::Path, paths: impl Iterator<Item = PathBuf>) -> Vec<String> {
    paths
        .map(|p| {
            p.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn test_top_level_listing_skips_directories() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::write(root.join("b.txt"), "b").unwrap();
    fs::write(root.join("a.jpg"), "a").unwrap();
    fs::create_dir(root.join("Images")).unwrap();
    fs::write(root.join("Images/old.png"), "old").unwrap();

    let scan = FileWalker::new().list_top_level(root).unwrap();
    let names: Vec<&str> = scan.files.iter().map(|f| f.name.as_str()).collect();

    assert_eq!(names, vec!["a.jpg", "b.txt"]);
    assert!(!scan.has_warnings());
}

#[test]
fn test_recursive_walk_is_sorted_by_full_path() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::create_dir_all(root.join("z/inner")).unwrap();
    fs::create_dir(root.join("a")).unwrap();
    fs::write(root.join("z/inner/deep.txt"), "1").unwrap();
    fs::write(root.join("z/top.txt"), "2").unwrap();
    fs::write(root.join("a/first.txt"), "3").unwrap();
    fs::write(root.join("m.txt"), "4").unwrap();
    fs::write(root.join("a.txt"), "5").unwrap();

    let scan = FileWalker::new().walk_files(root).unwrap();
    let paths = relative(root, scan.files.iter().map(|f| f.path.clone()));

    assert_eq!(
        paths,
        vec!["a/first.txt", "a.txt", "m.txt", "z/inner/deep.txt", "z/top.txt"]
    );
    assert_eq!(scan.dirs_visited, 3);
    assert_eq!(scan.total_size(), 5);
}

#[test]
fn test_walk_records_size_and_mtime() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("data.bin"), vec![0u8; 1234]).unwrap();

    let scan = FileWalker::new().walk_files(temp.path()).unwrap();

    assert_eq!(scan.files.len(), 1);
    assert_eq!(scan.files[0].size, 1234);
    assert!(scan.files[0].modified.is_some());
}

#[test]
fn test_empty_directory() {
    let temp = TempDir::new().unwrap();
    let scan = FileWalker::new().walk_files(temp.path()).unwrap();
    assert!(scan.files.is_empty());
    assert_eq!(scan.dirs_visited, 0);
}

#[cfg(unix)]
#[test]
fn test_symlinks_are_not_files() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::write(root.join("target.txt"), "t").unwrap();
    std::os::unix::fs::symlink(root.join("target.txt"), root.join("link.txt")).unwrap();

    let scan = FileWalker::new().walk_files(root).unwrap();
    let names: Vec<&str> = scan.files.iter().map(|f| f.name.as_str()).collect();

    assert_eq!(names, vec!["target.txt"]);
}
