//! Scanner types - configuration for migration file discovery

use std::path::PathBuf;

/// Configuration for an extraction run.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Root directory to scan for migration files
    pub root: PathBuf,
    /// Source file extension to look for (without the dot)
    pub extension: String,
    /// Number of threads for file reads (0 = auto)
    pub threads: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extension: "php".to_string(),
            threads: 0,
        }
    }
}
