//! Index configuration
//!
//! An index is configured in code or from a `docindex.toml` file:
//!
//! ```toml
//! root = "docs"
//! metadata_format = "yaml"
//! follow_links = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::MetadataFormat;

/// Default config file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "docindex.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Settings fixed for the lifetime of an index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Directory whose files are indexed
    pub root: PathBuf,

    /// Encoding of every document's metadata block
    pub metadata_format: MetadataFormat,

    /// Descend into symlinked directories and index symlinked files
    pub follow_links: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            metadata_format: MetadataFormat::Json,
            follow_links: false,
        }
    }
}

impl IndexConfig {
    /// Config for `root` with JSON metadata and no link following
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: MetadataFormat) -> Self {
        self.metadata_format = format;
        self
    }

    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Loads a config file. A relative `root` is resolved against the
    /// directory holding the file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let mut config: IndexConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        if config.root.is_relative() {
            if let Some(parent) = path.parent() {
                config.root = parent.join(&config.root);
            }
        }

        Ok(config)
    }

    /// Loads `docindex.toml` from `dir` if present, defaults otherwise
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load(&path)
    }
}
