//! Shared test utilities for the image-manifest test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! build(&Layout::for_root(tmp.path())).unwrap();
//!
//! let records = read_manifest(&tmp.path().join("images.json"));
//! assert_eq!(find_record(&records, "images/a.b.c.jpg").title, "A.b.c");
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::types::ImageRecord;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/project/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/project");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Create placeholder files (and their parent directories) under `root`.
///
/// The scanner only looks at names, so the content is irrelevant.
pub fn touch_all(root: &Path, relative_paths: &[&str]) {
    for rel in relative_paths {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "fake image").unwrap();
    }
}

// =========================================================================
// Manifest lookups (panic with a clear message on miss)
// =========================================================================

/// Parse a written manifest file.
pub fn read_manifest(path: &Path) -> Vec<ImageRecord> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read manifest {}: {e}", path.display()));
    serde_json::from_str(&content).unwrap()
}

/// All `src` values in manifest order.
pub fn srcs(records: &[ImageRecord]) -> Vec<&str> {
    records.iter().map(|r| r.src.as_str()).collect()
}

/// Find a record by `src`. Panics if not found.
pub fn find_record<'a>(records: &'a [ImageRecord], src: &str) -> &'a ImageRecord {
    records.iter().find(|r| r.src == src).unwrap_or_else(|| {
        let available = srcs(records);
        panic!("record '{src}' not found. Available: {available:?}")
    })
}
