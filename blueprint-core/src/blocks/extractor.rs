//! Regex-based extraction of `Schema::create` / `Schema::table` blocks.
//!
//! The surrounding PHP is never parsed; the two call shapes are matched
//! as text patterns and everything else in the file is ignored. An
//! unterminated block simply fails to match and is skipped.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::SchemaBlock;

/// `Schema::create('<table>', function (Blueprint $table) { ... });`
static CREATE_BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)Schema::create\s*\(\s*['"`]([^'"`]+)['"`]\s*,\s*function\s*\(([^)]*)\)\s*\{(.*?)\}\);"#,
    )
    .unwrap()
});

/// `Schema::table('<table>', function (Blueprint $table) { ... });`
static ALTER_BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)Schema::table\s*\(\s*['"`]([^'"`]+)['"`]\s*,\s*function\s*\(([^)]*)\)\s*\{(.*?)\}\);"#,
    )
    .unwrap()
});

/// First `$variable` inside the closure parameter list.
static PARAM_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$(\w+)").unwrap());

/// Extracts create and alter blocks from raw migration source.
pub struct BlockExtractor;

impl BlockExtractor {
    pub fn new() -> Self {
        Self
    }

    /// All `Schema::create` blocks, in order of appearance.
    pub fn create_blocks(&self, source: &str) -> Vec<SchemaBlock> {
        collect_blocks(&CREATE_BLOCK_REGEX, source)
    }

    /// All `Schema::table` blocks, in order of appearance.
    ///
    /// Collected independently of the create pass; the accumulator
    /// replays every create block of a file before any alter block,
    /// regardless of their relative position in the text.
    pub fn alter_blocks(&self, source: &str) -> Vec<SchemaBlock> {
        collect_blocks(&ALTER_BLOCK_REGEX, source)
    }
}

impl Default for BlockExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_blocks(regex: &Regex, source: &str) -> Vec<SchemaBlock> {
    regex
        .captures_iter(source)
        .map(|cap| {
            let param = PARAM_REGEX
                .captures(&cap[2])
                .map(|p| p[1].to_string())
                .unwrap_or_else(|| "table".to_string());
            SchemaBlock {
                table: cap[1].to_string(),
                param,
                body: cap[3].to_string(),
            }
        })
        .collect()
}
