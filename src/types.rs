//! Shared types written to the manifest.

use serde::{Deserialize, Serialize};

/// One image entry in `images.json`.
///
/// Field order is the serialized key order: `src` first, then `title`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Root-relative path with forward slashes, e.g. `images/icons/logo.svg`
    pub src: String,
    /// Display title derived from the filename
    pub title: String,
}
