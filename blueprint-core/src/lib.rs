//! blueprint-core: schema extraction engine for Laravel migrations
//!
//! Reconstructs the logical database schema implied by a directory of
//! Laravel migration files by replaying their `Schema::create` and
//! `Schema::table` blocks in chronological (lexical path) order:
//! - Scanner: recursive discovery of migration source files
//! - Blocks: regex extraction of create/alter blocks from raw text
//! - Statements: splitting and parsing of `$table->...` builder chains
//! - Schema: the accumulating table model and replay rules
//!
//! This is deliberately not a PHP parser. The builder DSL is matched as
//! text, unparseable content is skipped silently, and only unreadable
//! input is an error.

pub mod blocks;
pub mod errors;
pub mod scanner;
pub mod schema;
pub mod statements;

// Re-exports for convenience
pub use blocks::{BlockExtractor, SchemaBlock};
pub use errors::ExtractError;
pub use scanner::{discover_files, ExtractConfig};
pub use schema::{ColumnDefinition, ForeignKeyReference, SchemaAccumulator, TableDefinition};
pub use statements::{parse_statement, split_statements, Operation};

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, trace};

/// Runs the full extraction pipeline for one migrations directory.
pub struct SchemaExtractor {
    config: ExtractConfig,
}

impl SchemaExtractor {
    pub fn new(config: ExtractConfig) -> Self {
        if config.threads > 0 {
            rayon::ThreadPoolBuilder::new()
                .num_threads(config.threads)
                .build_global()
                .ok();
        }
        Self { config }
    }

    /// Discover, read and replay every migration file under the
    /// configured root, returning the final tables in first-seen order.
    ///
    /// File contents are read in parallel; replay itself is strictly
    /// sequential in path order, with every create block of a file
    /// applied before any of its alter blocks.
    pub fn extract(&self) -> Result<Vec<TableDefinition>, ExtractError> {
        let files = discover_files(&self.config.root, &self.config.extension)?;
        debug!(files = files.len(), root = %self.config.root.display(), "discovered migration files");

        let contents = read_files(&files)?;
        let extractor = BlockExtractor::new();
        let mut accumulator = SchemaAccumulator::new();

        for (path, source) in &contents {
            let creates = extractor.create_blocks(source);
            let alters = extractor.alter_blocks(source);
            trace!(
                file = %path.display(),
                creates = creates.len(),
                alters = alters.len(),
                "replaying migration file"
            );

            for block in &creates {
                accumulator.apply_create(&block.table, parse_operations(block));
            }
            for block in &alters {
                accumulator.apply_alter(&block.table, parse_operations(block));
            }
        }

        Ok(accumulator.into_tables())
    }
}

/// Extract the schema from a migrations directory with default settings.
pub fn extract_schema(root: impl AsRef<Path>) -> Result<Vec<TableDefinition>, ExtractError> {
    let config = ExtractConfig {
        root: root.as_ref().to_path_buf(),
        ..ExtractConfig::default()
    };
    SchemaExtractor::new(config).extract()
}

/// Read all files up front, in parallel. The indexed collect keeps the
/// result in discovery order, so replay order is unaffected by read
/// concurrency.
fn read_files(files: &[PathBuf]) -> Result<Vec<(PathBuf, String)>, ExtractError> {
    files
        .par_iter()
        .map(|path| {
            fs::read_to_string(path)
                .map(|source| (path.clone(), source))
                .map_err(|source| ExtractError::Io {
                    path: path.clone(),
                    source,
                })
        })
        .collect()
}

fn parse_operations(block: &SchemaBlock) -> Vec<Operation> {
    split_statements(&block.body, &block.param)
        .iter()
        .filter_map(|statement| parse_statement(statement))
        .collect()
}
