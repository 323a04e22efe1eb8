//! Scanner module - migration file discovery
//!
//! Walks a migrations directory recursively and produces the
//! deterministic replay order for the rest of the pipeline.

mod types;
mod walker;

pub use types::ExtractConfig;
pub use walker::discover_files;
