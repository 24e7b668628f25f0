//! Immutable view of every loaded document
//!
//! A snapshot is built once from a full walk and never mutated. Reloading
//! an index builds a new snapshot and swaps it in whole.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::domain::Document;

use super::error::IndexError;

/// Metadata, bodies and the sorted name list of one load
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<M> {
    /// Only documents that carried a metadata block
    meta: HashMap<String, M>,

    /// Every loaded document
    bodies: HashMap<String, Arc<[u8]>>,

    /// Sorted keys of `bodies`
    filenames: Arc<[String]>,
}

impl<M> Default for Snapshot<M> {
    fn default() -> Self {
        Self {
            meta: HashMap::new(),
            bodies: HashMap::new(),
            filenames: Arc::from(Vec::new()),
        }
    }
}

impl<M> FromIterator<Document<M>> for Snapshot<M> {
    fn from_iter<I: IntoIterator<Item = Document<M>>>(docs: I) -> Self {
        let mut meta = HashMap::new();
        let mut bodies = HashMap::new();

        for doc in docs {
            if let Some(m) = doc.metadata {
                meta.insert(doc.name.clone(), m);
            } else {
                // A later duplicate without metadata must not keep a stale entry.
                meta.remove(&doc.name);
            }
            bodies.insert(doc.name, doc.body);
        }

        let mut filenames: Vec<String> = bodies.keys().cloned().collect();
        filenames.sort();

        Self {
            meta,
            bodies,
            filenames: Arc::from(filenames),
        }
    }
}

impl<M> Snapshot<M> {
    /// Sorted names of all loaded documents
    pub fn filenames(&self) -> Arc<[String]> {
        Arc::clone(&self.filenames)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bodies.contains_key(name)
    }

    /// Number of documents that carried a metadata block
    pub fn metadata_count(&self) -> usize {
        self.meta.len()
    }

    /// Body of a document
    pub fn body(&self, name: &str) -> Option<Arc<[u8]>> {
        self.bodies.get(name).cloned()
    }

    /// Stored metadata of a document, `None` if it had no metadata block
    pub fn metadata(&self, name: &str) -> Option<&M> {
        self.meta.get(name)
    }
}

impl<M: Clone + Default> Snapshot<M> {
    /// Returns the body of `name`, writing its metadata (or the default
    /// record when it had none) into `out` if given.
    pub fn doc(&self, name: &str, out: Option<&mut M>) -> Result<Arc<[u8]>, IndexError> {
        let body = self
            .body(name)
            .ok_or_else(|| IndexError::DocumentNotFound(name.to_string()))?;

        if let Some(out) = out {
            *out = self.metadata_or_default(name);
        }

        Ok(body)
    }

    /// Writes one entry per loaded document into `out`
    pub fn all_metadata_into(&self, out: &mut HashMap<String, M>) {
        for name in self.filenames.iter() {
            out.insert(name.clone(), self.metadata_or_default(name));
        }
    }

    /// Metadata of every loaded document, keyed and ordered by name
    pub fn all_metadata(&self) -> BTreeMap<String, M> {
        self.filenames
            .iter()
            .map(|name| (name.clone(), self.metadata_or_default(name)))
            .collect()
    }

    fn metadata_or_default(&self, name: &str) -> M {
        self.meta.get(name).cloned().unwrap_or_default()
    }
}
