//! Project configuration.
//!
//! By default the tool reads `images/` and writes `images.json`, both relative
//! to the project root (the working directory unless `--root` is given).
//! Either location can be changed with an optional `image-manifest.toml` in the
//! project root:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! images_dir = "images"     # Directory scanned for images
//! output = "images.json"    # Manifest file written after the scan
//! ```
//!
//! Command-line flags override values from the file. Both paths must be
//! relative to the root and may not climb out of it with `..`: web paths in
//! the manifest are computed relative to the root, so an image directory
//! outside it would produce unusable `src` values.
//!
//! The set of image extensions is fixed and not configurable; see
//! [`crate::scan::IMAGE_EXTENSIONS`].
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Name of the optional config file in the project root.
pub const CONFIG_FILE: &str = "image-manifest.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `image-manifest.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManifestConfig {
    /// Directory scanned for images, relative to the project root.
    pub images_dir: String,
    /// Manifest output file, relative to the project root.
    pub output: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            images_dir: "images".to_string(),
            output: "images.json".to_string(),
        }
    }
}

impl ManifestConfig {
    /// Validate that both paths are usable relative paths.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_relative("images_dir", &self.images_dir)?;
        validate_relative("output", &self.output)?;
        Ok(())
    }

    /// Apply command-line overrides on top of file values.
    pub fn with_overrides(mut self, images_dir: Option<String>, output: Option<String>) -> Self {
        if let Some(dir) = images_dir {
            self.images_dir = dir;
        }
        if let Some(out) = output {
            self.output = out;
        }
        self
    }

    /// Resolve configured paths against a project root.
    pub fn layout(&self, root: &Path) -> Layout {
        Layout {
            root: root.to_path_buf(),
            images_dir: root.join(&self.images_dir),
            output: root.join(&self.output),
        }
    }
}

fn validate_relative(key: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{key} must not be empty")));
    }
    let path = Path::new(value);
    if path.has_root() || path.is_absolute() {
        return Err(ConfigError::Validation(format!(
            "{key} must be relative to the project root, got {value:?}"
        )));
    }
    if path.components().any(|c| c == Component::ParentDir) {
        return Err(ConfigError::Validation(format!(
            "{key} must not contain '..', got {value:?}"
        )));
    }
    Ok(())
}

/// Concrete paths for one run of the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Project root; web paths are relative to this
    pub root: PathBuf,
    /// Directory scanned for images
    pub images_dir: PathBuf,
    /// Manifest file to write
    pub output: PathBuf,
}

impl Layout {
    /// Default layout for a project root: `<root>/images` → `<root>/images.json`.
    pub fn for_root(root: &Path) -> Self {
        ManifestConfig::default().layout(root)
    }
}

/// Load `image-manifest.toml` from the project root.
///
/// Returns defaults if the file doesn't exist. The loaded config is validated.
pub fn load_config(root: &Path) -> Result<ManifestConfig, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(ManifestConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: ManifestConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Stock config file with every option documented.
pub fn stock_config_toml() -> &'static str {
    r#"# image-manifest configuration
# Place this file as image-manifest.toml in the project root.
# All options are optional; the values below are the defaults.

# Directory scanned (recursively) for images, relative to the project root.
# Included extensions: webp, avif, png, jpg, jpeg, gif, svg (any case).
images_dir = "images"

# Manifest file written after the scan, relative to the project root.
# Existing content is overwritten.
output = "images.json"
"#
}
