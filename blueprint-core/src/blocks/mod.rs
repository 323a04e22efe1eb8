//! Block extraction module
//!
//! Locates `Schema::create(...)` and `Schema::table(...)` calls inside
//! arbitrary surrounding source text and yields their table name,
//! builder parameter and body.

mod extractor;
mod types;

pub use extractor::BlockExtractor;
pub use types::SchemaBlock;
