//! # Storage Layer
//!
//! Loads a directory tree of documents into memory and serves lookups.
//!
//! ## Document Format
//!
//! | Part | Content |
//! |------|---------|
//! | Metadata block | Everything before the first blank line, decoded with the index's [`MetadataFormat`](crate::domain::MetadataFormat) |
//! | Body | Everything after the first blank line, kept as raw bytes |
//!
//! A file with no blank line has no metadata block; its whole content is
//! the body and its metadata is reported as the record type's default.
//!
//! ## Concurrency Safety
//!
//! - [`DocIndex`] keeps one [`Snapshot`] behind a single `RwLock`
//! - [`DocIndex::reload`] holds the write lock for the whole walk and swaps
//!   the snapshot only on success
//! - Lookups hold the read lock only while copying out what they return
//!
//! ## Key Types
//!
//! - [`DocIndex`] - Entry point: open, reload, look up
//! - [`Snapshot`] - One immutable, consistent load
//! - [`IndexConfig`] - Root directory, metadata format, link following
//! - [`IndexError`] - Everything that can fail

mod config;
mod error;
mod index;
mod snapshot;
mod walk;

pub use config::{ConfigError, IndexConfig, CONFIG_FILE_NAME};
pub use error::IndexError;
pub use index::DocIndex;
pub use snapshot::Snapshot;
pub use walk::{check_root, walk_files, WalkedFile};
