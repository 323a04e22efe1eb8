//! blueprint: print the database schema implied by Laravel migrations.
//!
//! Points the extraction engine at a migrations directory (or a project
//! root using the conventional `database/migrations` layout) and writes
//! the reconstructed tables to stdout as JSON.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use blueprint_core::{ExtractConfig, SchemaExtractor};

#[derive(Debug, Parser)]
#[command(name = "blueprint", version, about = "Reconstruct a database schema from Laravel migrations")]
struct Cli {
    /// Migrations directory, or a project root containing
    /// database/migrations
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Source file extension to scan for
    #[arg(long, default_value = "php")]
    extension: String,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,

    /// Worker threads for file reads (0 = auto)
    #[arg(long, default_value_t = 0)]
    threads: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let root = resolve_migrations_dir(cli.path);
    debug!(root = %root.display(), "extracting schema");

    let config = ExtractConfig {
        root: root.clone(),
        extension: cli.extension,
        threads: cli.threads,
    };
    let tables = SchemaExtractor::new(config)
        .extract()
        .with_context(|| format!("failed to extract schema from {}", root.display()))?;

    let report = if cli.pretty {
        serde_json::to_string_pretty(&tables)?
    } else {
        serde_json::to_string(&tables)?
    };
    println!("{report}");

    Ok(())
}

/// Laravel convention: migrations live in `<project>/database/migrations`.
/// When the given path contains that layout, descend into it; otherwise
/// treat the path itself as the migrations directory.
fn resolve_migrations_dir(path: PathBuf) -> PathBuf {
    let conventional = path.join("database").join("migrations");
    if conventional.is_dir() {
        conventional
    } else {
        path
    }
}
