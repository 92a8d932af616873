//! Filesystem scanning.
//!
//! Stage 1 of the manifest build. Walks the image directory recursively and
//! collects every file whose extension is in [`IMAGE_EXTENSIONS`]:
//!
//! ```text
//! project/                    # Root (web paths are relative to this)
//! └── images/                 # Image directory
//!     ├── logo.svg            # included
//!     ├── ICON.PNG            # included (extension match is case-insensitive)
//!     ├── notes.txt           # skipped
//!     └── sub/
//!         └── dir/
//!             └── x.webp      # included at any depth
//! ```
//!
//! ## Failure Semantics
//!
//! The scan is all-or-nothing. A missing or unlistable image directory is
//! reported before any traversal starts, and an I/O error on any
//! subdirectory aborts the whole scan rather than skipping that branch.
//!
//! Paths come back in traversal order. Callers sort them; see
//! [`crate::manifest::build_manifest`].

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("No {}/ folder found. Create {}/ and put your icons there.", dir_label(.0), dir_label(.0))]
    MissingDirectory(PathBuf),
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Failed to read directory: {0}")]
    Walk(#[from] walkdir::Error),
}

fn dir_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// File extensions (lowercase, without the dot) that make it into the manifest.
pub const IMAGE_EXTENSIONS: &[&str] = &["webp", "avif", "png", "jpg", "jpeg", "gif", "svg"];

/// Collect every image file under `images_dir`.
pub fn scan_images(images_dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let metadata = fs::metadata(images_dir)
        .map_err(|_| ScanError::MissingDirectory(images_dir.to_path_buf()))?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory(images_dir.to_path_buf()));
    }
    // Exists but can't be listed: same report as a missing directory
    fs::read_dir(images_dir).map_err(|_| ScanError::MissingDirectory(images_dir.to_path_buf()))?;

    let mut files = Vec::new();
    for entry in WalkDir::new(images_dir).min_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_dir() && is_image(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Whether a path has one of the allowed image extensions.
pub fn is_image(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    fn relative_names(images_dir: &Path, files: &[PathBuf]) -> Vec<String> {
        let mut names: Vec<String> = files
            .iter()
            .map(|p| {
                p.strip_prefix(images_dir)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        names.sort();
        names
    }

    #[test]
    fn finds_images_at_every_depth() {
        let tmp = TempDir::new().unwrap();
        touch_all(tmp.path(), &["a.png", "one/b.jpg", "one/two/three/c.webp"]);

        let files = scan_images(tmp.path()).unwrap();

        assert_eq!(
            relative_names(tmp.path(), &files),
            vec!["a.png", "one/b.jpg", "one/two/three/c.webp"]
        );
    }

    #[test]
    fn non_image_files_skipped() {
        let tmp = TempDir::new().unwrap();
        touch_all(tmp.path(), &["notes.txt", "photo.tiff", "noext", "keep.gif"]);

        let files = scan_images(tmp.path()).unwrap();

        assert_eq!(relative_names(tmp.path(), &files), vec!["keep.gif"]);
    }

    #[test]
    fn uppercase_extension_included() {
        let tmp = TempDir::new().unwrap();
        touch_all(tmp.path(), &["ICON.PNG", "Photo.JpEg"]);

        let files = scan_images(tmp.path()).unwrap();

        assert_eq!(
            relative_names(tmp.path(), &files),
            vec!["ICON.PNG", "Photo.JpEg"]
        );
    }

    #[test]
    fn directory_with_image_extension_not_listed() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("folder.png")).unwrap();
        touch_all(tmp.path(), &["folder.png/inner.svg"]);

        let files = scan_images(tmp.path()).unwrap();

        assert_eq!(
            relative_names(tmp.path(), &files),
            vec!["folder.png/inner.svg"]
        );
    }

    #[test]
    fn empty_directory_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("empty/nested")).unwrap();

        assert!(scan_images(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = scan_images(&tmp.path().join("images"));
        assert!(matches!(result, Err(ScanError::MissingDirectory(_))));
    }

    #[test]
    fn missing_directory_message_names_folder() {
        let err = ScanError::MissingDirectory(PathBuf::from("/site/images"));
        assert_eq!(
            err.to_string(),
            "No images/ folder found. Create images/ and put your icons there."
        );
    }

    #[test]
    fn file_in_place_of_directory_is_error() {
        let tmp = TempDir::new().unwrap();
        touch_all(tmp.path(), &["images"]);

        let result = scan_images(&tmp.path().join("images"));
        assert!(matches!(result, Err(ScanError::NotADirectory(_))));
    }

    /// Lock `dir` for the duration of `f`. Returns `None` (after printing a
    /// notice) when permission bits are not enforced, e.g. running as root.
    #[cfg(unix)]
    fn with_locked_dir<T>(dir: &Path, f: impl FnOnce() -> T) -> Option<T> {
        use std::os::unix::fs::PermissionsExt;

        fs::set_permissions(dir, fs::Permissions::from_mode(0o000)).unwrap();
        let enforced = fs::read_dir(dir).is_err();
        let result = enforced.then(f);
        fs::set_permissions(dir, fs::Permissions::from_mode(0o755)).unwrap();

        if !enforced {
            eprintln!(
                "skipping permission check: {} is still readable (running as root?)",
                dir.display()
            );
        }
        result
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_subdirectory_aborts_scan() {
        let tmp = TempDir::new().unwrap();
        touch_all(tmp.path(), &["ok.png", "locked/hidden.png"]);

        let result = with_locked_dir(&tmp.path().join("locked"), || scan_images(tmp.path()));

        if let Some(result) = result {
            assert!(matches!(result, Err(ScanError::Walk(_))));
        }
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_images_dir_reported_as_missing() {
        let tmp = TempDir::new().unwrap();
        let images = tmp.path().join("images");
        touch_all(tmp.path(), &["images/a.png"]);

        let result = with_locked_dir(&images, || scan_images(&images));

        if let Some(result) = result {
            assert!(matches!(result, Err(ScanError::MissingDirectory(_))));
        }
    }

    #[test]
    fn is_image_checks_allow_list() {
        for ext in IMAGE_EXTENSIONS {
            assert!(is_image(Path::new(&format!("x.{ext}"))), "{ext}");
        }
        assert!(is_image(Path::new("dir/ICON.SVG")));
        assert!(!is_image(Path::new("notes.txt")));
        assert!(!is_image(Path::new("png")));
        assert!(!is_image(Path::new("archive.png.zip")));
    }
}
