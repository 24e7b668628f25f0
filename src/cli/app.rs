//! Main CLI application structure

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

use super::output::{Output, OutputFormat};
use crate::domain::MetadataFormat;
use crate::storage::{DocIndex, IndexConfig};

#[derive(Parser)]
#[command(name = "docindex")]
#[command(author, version, about = "Inspect a directory of documents with metadata headers")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory to index (overrides the config file)
    #[arg(long, short = 'r', global = true, env = "DOCINDEX_ROOT")]
    pub root: Option<PathBuf>,

    /// Config file (defaults to ./docindex.toml when present)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Encoding of metadata blocks: json, yaml or toml
    #[arg(long, short = 'm', global = true)]
    pub metadata_format: Option<MetadataFormat>,

    /// Follow symbolic links while walking
    #[arg(long, global = true)]
    pub follow_links: bool,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List indexed documents in name order
    List,

    /// Print a document's body
    Show {
        /// Document name relative to the root (e.g. `subdir/bar.txt`)
        name: String,

        /// Print the metadata instead of the body
        #[arg(long)]
        meta: bool,
    },

    /// Print the metadata of every document
    Meta,
}

/// Parses arguments and runs the selected command
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let config = resolve_config(&cli, &cwd)?;
    tracing::debug!(
        root = %config.root.display(),
        format = %config.metadata_format,
        follow_links = config.follow_links,
        "resolved configuration"
    );

    let index: DocIndex<Value> = DocIndex::with_config(config)
        .context("Failed to load index")?;

    let output = Output::new(cli.format);
    match cli.command {
        Commands::List => list(&index, &output),
        Commands::Show { name, meta } => show(&index, &output, &name, meta),
        Commands::Meta => all_meta(&index, &output),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "docindex=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Merges the config file (explicit or found in `cwd`) with command-line overrides
fn resolve_config(cli: &Cli, cwd: &Path) -> Result<IndexConfig> {
    let mut config = match &cli.config {
        Some(path) => IndexConfig::load(path)?,
        None => IndexConfig::load_from_dir(cwd)?,
    };

    if let Some(root) = &cli.root {
        config.root = root.clone();
    }
    if let Some(format) = cli.metadata_format {
        config.metadata_format = format;
    }
    if cli.follow_links {
        config.follow_links = true;
    }

    Ok(config)
}

fn list(index: &DocIndex<Value>, output: &Output) -> Result<()> {
    let names = index.filenames();

    if output.is_json() {
        return output.data(&*names);
    }

    for name in names.iter() {
        output.row(&[name.as_str()]);
    }
    Ok(())
}

fn show(index: &DocIndex<Value>, output: &Output, name: &str, meta_only: bool) -> Result<()> {
    let (body, meta) = index.doc_with_metadata(name)?;

    if output.is_json() {
        let data = if meta_only {
            json!({ "name": name, "metadata": meta })
        } else {
            json!({
                "name": name,
                "metadata": meta,
                "body": String::from_utf8_lossy(&body),
            })
        };
        return output.data(&data);
    }

    if meta_only {
        output.data(&meta)
    } else {
        output.raw(&body)
    }
}

fn all_meta(index: &DocIndex<Value>, output: &Output) -> Result<()> {
    let all = index.all_metadata();

    if output.is_json() {
        return output.data(&all);
    }

    for (name, meta) in &all {
        let meta = serde_json::to_string(meta).context("Failed to serialize metadata")?;
        output.row(&[name.as_str(), meta.as_str()]);
    }
    Ok(())
}
