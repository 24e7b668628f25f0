//! docindex - An in-memory index over a directory of documents
//!
//! Every file under the index root is a document: an optional metadata
//! block, a blank line, then the body. [`DocIndex`] loads them all, keeps
//! them in one consistent snapshot, and reloads on request.
//!
//! ```no_run
//! use docindex::DocIndex;
//!
//! #[derive(Debug, Default, Clone, serde::Deserialize)]
//! struct Metadata {
//!     #[serde(rename = "Title")]
//!     title: String,
//! }
//!
//! let index: DocIndex<Metadata> = DocIndex::open("docs")?;
//! for name in index.filenames().iter() {
//!     let (body, meta) = index.doc_with_metadata(name)?;
//!     println!("{}: {} ({} bytes)", name, meta.title, body.len());
//! }
//! # Ok::<(), docindex::IndexError>(())
//! ```

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{Document, MetadataFormat};
pub use storage::{DocIndex, IndexConfig, IndexError, Snapshot};
