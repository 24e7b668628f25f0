//! # Command-Line Interface
//!
//! A read-only inspector built on [`DocIndex`](crate::storage::DocIndex).
//! Metadata is decoded into untyped JSON values.
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `list` | Sorted document names |
//! | `show <name>` | Body of one document (`--meta` for its metadata) |
//! | `meta` | Metadata of every document |
//!
//! ## Output Formats
//!
//! All commands support `--format`:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! `--verbose` (or `-v`) turns on debug logging to stderr. `RUST_LOG`
//! takes precedence when set.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
