//! Errors raised while building or querying an index

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::DecodeError;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Index root not found: {}", .root.display())]
    RootNotFound {
        root: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Index root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to read {}: {source}", .file.display())]
    Read {
        file: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to decode metadata of {file}: {source}")]
    Decode {
        file: String,
        #[source]
        source: DecodeError,
    },

    #[error("Document not found: '{0}'")]
    DocumentNotFound(String),
}

impl IndexError {
    /// True if a lookup named a document absent from the current snapshot
    pub fn is_document_not_found(&self) -> bool {
        matches!(self, IndexError::DocumentNotFound(_))
    }

    /// True if the index root does not exist
    pub fn is_root_not_found(&self) -> bool {
        match self {
            IndexError::RootNotFound { source, .. } => source.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
