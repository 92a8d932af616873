//! Manifest construction and serialization.
//!
//! Stage 2 of the build. Turns scanned file paths into the ordered list of
//! [`ImageRecord`]s and writes it out as `images.json`:
//!
//! ```json
//! [
//!   {
//!     "src": "images/icons/logo.svg",
//!     "title": "Logo"
//!   }
//! ]
//! ```
//!
//! ## Ordering
//!
//! Records are sorted by `src` using ordinal string comparison. This is the
//! only thing that makes the output deterministic: traversal order varies by
//! platform and filesystem, the sorted web paths do not.

use crate::naming::prettify_title;
use crate::types::ImageRecord;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convert a filesystem path to a root-relative, forward-slash web path.
///
/// `/site/images/sub/x.webp` under root `/site` → `images/sub/x.webp`.
/// A path outside `root` keeps its full form (separators still normalized).
pub fn to_web_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative.to_string_lossy().replace('\\', "/")
}

/// Build the sorted record list for a set of scanned image paths.
pub fn build_manifest(root: &Path, paths: &[PathBuf]) -> Vec<ImageRecord> {
    let mut entries: Vec<(String, &PathBuf)> = paths
        .iter()
        .map(|p| (to_web_path(root, p), p))
        .collect();

    entries.sort_by(|a, b| a.0.cmp(&b.0));

    entries
        .into_iter()
        .map(|(src, path)| {
            let filename = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            ImageRecord {
                title: prettify_title(&filename),
                src,
            }
        })
        .collect()
}

/// Serialize records as a 2-space indented JSON array.
pub fn to_json(records: &[ImageRecord]) -> Result<String, WriteError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Serialize and write the manifest, replacing any existing file.
pub fn write_manifest(output: &Path, records: &[ImageRecord]) -> Result<(), WriteError> {
    let json = to_json(records)?;
    fs::write(output, json).map_err(|source| WriteError::Io {
        path: output.to_path_buf(),
        source,
    })
}
