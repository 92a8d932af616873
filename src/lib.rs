//! # Image Manifest
//!
//! Generates `images.json`, an index of the images under a project's `images/`
//! directory, for static sites and gallery front-ends that want a list of
//! available images without maintaining one by hand.
//!
//! ```json
//! [
//!   { "src": "images/icons/my_icon-file.png", "title": "My Icon File" },
//!   { "src": "images/sub/dir/x.webp", "title": "X" }
//! ]
//! ```
//!
//! (The real file is pretty-printed with one key per line.)
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan      images/       →  file paths      (recursive, extension filter)
//! 2. Manifest  file paths    →  ImageRecords    (web path + title, sorted by src)
//! 3. Write     ImageRecords  →  images.json     (2-space indented JSON)
//! ```
//!
//! Every run is all-or-nothing: a missing image directory or an unreadable
//! subdirectory aborts before the output file is touched. Given an unchanged
//! tree, two runs produce byte-identical output.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the image directory and filters by extension |
//! | [`naming`] | Filename → display title conversion |
//! | [`manifest`] | Web paths, ordering, JSON serialization and writing |
//! | [`pipeline`] | Runs scan → manifest → write for a [`config::Layout`] |
//! | [`config`] | Optional `image-manifest.toml` loading and path layout |
//! | [`types`] | The serialized [`types::ImageRecord`] |
//! | [`output`] | CLI output formatting |

pub mod config;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod pipeline;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
