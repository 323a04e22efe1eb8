//! Error handling for the extraction engine.
//! One error enum for the subsystem, `thiserror` only, zero `anyhow`.

use std::path::PathBuf;

/// Errors that can abort an extraction run.
///
/// Parsing irregularities never surface here; unmatched blocks and
/// statements are skipped silently so one malformed migration cannot
/// take down the whole report.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Migrations directory not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
