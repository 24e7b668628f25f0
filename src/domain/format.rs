//! Metadata block encodings
//!
//! The metadata block at the top of a document is decoded with one format,
//! chosen once when the index is created. JSON is the default.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to decode a metadata block into the record type
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid JSON metadata: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML metadata: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid TOML metadata: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("metadata is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Encoding of the metadata block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

impl MetadataFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataFormat::Json => "json",
            MetadataFormat::Yaml => "yaml",
            MetadataFormat::Toml => "toml",
        }
    }

    /// Decodes a metadata block into a fresh record.
    pub fn decode<M: DeserializeOwned>(&self, raw: &[u8]) -> Result<M, DecodeError> {
        match self {
            MetadataFormat::Json => Ok(serde_json::from_slice(raw)?),
            MetadataFormat::Yaml => Ok(serde_yaml::from_slice(raw)?),
            MetadataFormat::Toml => {
                let text = std::str::from_utf8(raw)?;
                Ok(toml::from_str(text)?)
            }
        }
    }
}

impl fmt::Display for MetadataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetadataFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(MetadataFormat::Json),
            "yaml" | "yml" => Ok(MetadataFormat::Yaml),
            "toml" => Ok(MetadataFormat::Toml),
            other => Err(format!("unknown metadata format: '{}'", other)),
        }
    }
}
