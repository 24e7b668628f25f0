//! Domain models for docindex
//!
//! Document parsing and metadata decoding, without any I/O concerns.

mod document;
mod format;

pub use document::{split_metadata, Document, BOUNDARY};
pub use format::{DecodeError, MetadataFormat};
