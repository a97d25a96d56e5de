use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

use tempfile::TempDir;
use tidyfile_analyze::{
    DuplicateConfig, DuplicateFinder, RetentionPolicy, hash_file, DEFAULT_CHUNK_SIZE,
};
use tidyfile_core::FileEntry;

fn entry(path: &Path) -> FileEntry {
    let metadata = fs::metadata(path).unwrap();
    FileEntry::new(path, metadata.len(), metadata.modified().ok())
}

#[test]
fn test_duplicate_config_builder() {
    let config = DuplicateConfig::builder().chunk_size(4usize).build().unwrap();
    assert_eq!(config.chunk_size, 4);

    let default_config = DuplicateConfig::default();
    assert_eq!(default_config.chunk_size, DEFAULT_CHUNK_SIZE);
}

#[test]
fn test_chunk_size_does_not_change_digest() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("data.bin");
    let content: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
    fs::write(&path, &content).unwrap();

    let small = hash_file(&path, 7).unwrap();
    let large = hash_file(&path, DEFAULT_CHUNK_SIZE).unwrap();
    assert_eq!(small, large);
    assert_eq!(small.0, *blake3::hash(&content).as_bytes());
}

#[test]
fn test_find_duplicates_in_nested_dirs() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("a/b")).unwrap();
    fs::write(root.join("a/b/first.txt"), "shared").unwrap();
    fs::write(root.join("a/second.txt"), "shared").unwrap();
    fs::write(root.join("third.txt"), "shared").unwrap();
    fs::write(root.join("other.txt"), "different").unwrap();

    let files = vec![
        entry(&root.join("a/b/first.txt")),
        entry(&root.join("a/second.txt")),
        entry(&root.join("other.txt")),
        entry(&root.join("third.txt")),
    ];

    let plan = DuplicateFinder::with_config(DuplicateConfig { chunk_size: 3 }).find_duplicates(&files);

    assert_eq!(plan.files_hashed, 4);
    assert_eq!(plan.canonical.len(), 2);
    assert_eq!(plan.duplicates.len(), 2);
    assert!(plan.failures.is_empty());

    let original = root.join("a/b/first.txt");
    let of_first: Vec<_> = plan.duplicates_of(&original).map(|d| d.path.clone()).collect();
    assert_eq!(of_first, vec![root.join("a/second.txt"), root.join("third.txt")]);
    assert_eq!(plan.reclaimable_bytes(), 12);
}

#[test]
fn test_zero_byte_files_share_a_digest() {
    let temp = TempDir::new().unwrap();
    let files: Vec<FileEntry> = ["x", "y", "z"]
        .iter()
        .map(|name| {
            let path = temp.path().join(name);
            fs::write(&path, "").unwrap();
            entry(&path)
        })
        .collect();

    let plan = DuplicateFinder::new().find_duplicates(&files);

    assert_eq!(plan.canonical.len(), 1);
    assert_eq!(plan.duplicates.len(), 2);
    assert!(plan.duplicates.iter().all(|d| d.original == temp.path().join("x")));
    assert_eq!(plan.reclaimable_bytes(), 0);
}

#[test]
fn test_same_size_different_content() {
    let temp = TempDir::new().unwrap();
    let a = temp.path().join("a");
    let b = temp.path().join("b");
    fs::write(&a, "abcd").unwrap();
    fs::write(&b, "abce").unwrap();

    let plan = DuplicateFinder::new().find_duplicates(&[entry(&a), entry(&b)]);
    assert!(!plan.has_duplicates());
}

#[test]
fn test_retention_on_real_files() {
    let temp = TempDir::new().unwrap();
    let old = temp.path().join("old.log");
    let new = temp.path().join("new.log");
    fs::write(&old, "old").unwrap();
    fs::write(&new, "new").unwrap();

    let now = SystemTime::now();
    fs::File::options()
        .write(true)
        .open(&old)
        .unwrap()
        .set_modified(now - Duration::from_secs(45 * 24 * 60 * 60))
        .unwrap();

    let policy = RetentionPolicy::builder()
        .max_age_days(30u32)
        .reference_time(now)
        .build()
        .unwrap();
    let plan = policy.evaluate(&[entry(&old), entry(&new)]);

    assert_eq!(plan.expired.len(), 1);
    assert_eq!(plan.expired[0].path, old);
    assert_eq!(plan.retained, 1);
    assert_eq!(plan.expired_bytes(), 3);
}

#[test]
fn test_retention_policy_builder_validation() {
    assert!(RetentionPolicy::builder().build().is_err());
    assert!(RetentionPolicy::builder().max_age_days(0u32).build().is_err());

    let policy = RetentionPolicy::builder().max_age_days(7u32).build().unwrap();
    assert_eq!(policy.max_age(), Duration::from_secs(7 * 24 * 60 * 60));
}
