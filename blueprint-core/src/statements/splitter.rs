//! Normalizes a block body into atomic builder statements.

use once_cell::sync::Lazy;
use regex::Regex;

static LINE_BREAK_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r?\n+").unwrap());

/// Whitespace around the chain operator, including line-wrapped chains
/// that were just joined.
static CHAIN_WS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*->\s*").unwrap());

/// Split a block body into trimmed statements that call into the
/// block's builder parameter (`$<param>->...`).
///
/// Line breaks are stripped first so a chain wrapped over several lines
/// becomes one statement, then the text is cut on `;`. Fragments that
/// never touch the builder parameter are dropped silently.
pub fn split_statements(body: &str, param: &str) -> Vec<String> {
    let one_line = LINE_BREAK_REGEX.replace_all(body, "");
    let one_line = CHAIN_WS_REGEX.replace_all(&one_line, "->");

    let accessor = format!("${param}->");
    one_line
        .split(';')
        .map(str::trim)
        .filter(|fragment| fragment.contains(&accessor))
        .map(str::to_string)
        .collect()
}
