//! In-memory document index
//!
//! [`DocIndex`] loads every regular file under a root directory, splits
//! each into metadata and body, and serves lookups from the resulting
//! [`Snapshot`].
//!
//! One lock guards the whole snapshot. [`DocIndex::reload`] holds the write
//! lock for the entire walk, builds the new snapshot in locals, and swaps it
//! in only on success. Readers never see a half-built snapshot and a failed
//! reload leaves the previous one untouched.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::de::DeserializeOwned;

use crate::domain::{Document, MetadataFormat};

use super::config::IndexConfig;
use super::error::IndexError;
use super::snapshot::Snapshot;
use super::walk;

/// Index over a directory of documents whose metadata decodes into `M`
#[derive(Debug)]
pub struct DocIndex<M> {
    config: IndexConfig,
    snapshot: RwLock<Arc<Snapshot<M>>>,
}

impl<M> DocIndex<M>
where
    M: DeserializeOwned + Default + Clone,
{
    /// Opens `root` with JSON metadata and loads every document in it.
    ///
    /// Fails with [`IndexError::RootNotFound`] or
    /// [`IndexError::NotADirectory`] before walking anything if `root` is
    /// not an existing directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, IndexError> {
        Self::with_config(IndexConfig::new(root))
    }

    /// Opens an index with explicit settings and performs the initial load
    pub fn with_config(config: IndexConfig) -> Result<Self, IndexError> {
        walk::check_root(&config.root)?;

        let snapshot = load_snapshot(&config)?;
        Ok(Self {
            config,
            snapshot: RwLock::new(Arc::new(snapshot)),
        })
    }

    /// Re-walks the root and replaces the snapshot.
    ///
    /// Concurrent readers block until the reload finishes. On error the
    /// current snapshot is kept as it was.
    pub fn reload(&self) -> Result<(), IndexError> {
        let mut current = self.snapshot.write();

        let snapshot = load_snapshot(&self.config)?;
        *current = Arc::new(snapshot);

        Ok(())
    }

    /// Body of `name`. If `out` is given it receives the document's
    /// metadata, or `M::default()` when the document has no metadata block.
    pub fn doc(&self, name: &str, out: Option<&mut M>) -> Result<Arc<[u8]>, IndexError> {
        self.snapshot.read().doc(name, out)
    }

    /// Body and metadata of `name`
    pub fn doc_with_metadata(&self, name: &str) -> Result<(Arc<[u8]>, M), IndexError> {
        let mut meta = M::default();
        let body = self.doc(name, Some(&mut meta))?;
        Ok((body, meta))
    }

    /// Inserts an entry for every document into `out`, replacing existing
    /// values for the same names.
    pub fn all_metadata_into(&self, out: &mut HashMap<String, M>) {
        self.snapshot.read().all_metadata_into(out);
    }

    /// Metadata of every document, ordered by name
    pub fn all_metadata(&self) -> BTreeMap<String, M> {
        self.snapshot.read().all_metadata()
    }
}

impl<M> DocIndex<M> {
    /// Sorted names of the documents loaded by the last successful load
    pub fn filenames(&self) -> Arc<[String]> {
        self.snapshot.read().filenames()
    }

    /// The current snapshot, for several lookups against one consistent view
    pub fn snapshot(&self) -> Arc<Snapshot<M>> {
        self.snapshot.read().clone()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.snapshot.read().contains(name)
    }

    pub fn len(&self) -> usize {
        self.snapshot.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.read().is_empty()
    }

    pub fn root(&self) -> &Path {
        &self.config.root
    }

    pub fn format(&self) -> MetadataFormat {
        self.config.metadata_format
    }
}

/// Walks and parses the whole tree into a fresh snapshot
fn load_snapshot<M: DeserializeOwned>(config: &IndexConfig) -> Result<Snapshot<M>, IndexError> {
    let result = walk::walk_files(&config.root, config.follow_links)
        .map(|file| {
            let file = file?;
            Document::parse(&*file.name, &file.content, config.metadata_format).map_err(
                |source| IndexError::Decode {
                    file: file.name.clone(),
                    source,
                },
            )
        })
        .collect::<Result<Snapshot<M>, IndexError>>();

    match &result {
        Ok(snapshot) => tracing::info!(
            root = %config.root.display(),
            documents = snapshot.len(),
            with_metadata = snapshot.metadata_count(),
            "index loaded"
        ),
        Err(err) => tracing::warn!(root = %config.root.display(), error = %err, "index load failed"),
    }

    result
}
