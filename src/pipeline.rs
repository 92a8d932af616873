//! Scan → manifest → write, for one project layout.

use crate::config::Layout;
use crate::manifest::{self, WriteError};
use crate::scan::{self, ScanError};
use crate::types::ImageRecord;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Result of a successful build.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildSummary {
    pub output: PathBuf,
    pub count: usize,
}

/// Scan the image directory and return the records that would be written.
pub fn check(layout: &Layout) -> Result<Vec<ImageRecord>, BuildError> {
    let files = scan::scan_images(&layout.images_dir)?;
    Ok(manifest::build_manifest(&layout.root, &files))
}

/// Scan the image directory and write the manifest.
///
/// The output file is only touched after the scan has fully succeeded.
pub fn build(layout: &Layout) -> Result<BuildSummary, BuildError> {
    let records = check(layout)?;
    manifest::write_manifest(&layout.output, &records)?;
    Ok(BuildSummary {
        output: layout.output.clone(),
        count: records.len(),
    })
}
