//! Classifies atomic builder statements into structured operations.
//!
//! Pattern matching is deliberately best-effort: argument lists stop at
//! the first closing paren, so a nested call inside the first argument
//! list (an `enum` column listing its options, say) will mis-extract
//! the name/type boundary. Statements that match no shape are dropped.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::Operation;
use crate::schema::{ColumnDefinition, ForeignKeyReference};

/// `$table->dropColumn('a', 'b')`
static DROP_COLUMN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\w+->dropColumn\(([^)]+)\)").unwrap());

/// `$table->foreign('user_id')` plus the remainder chain
static FOREIGN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\$\w+->foreign\(['"`]([^'"`]+)['"`]\)(.*)"#).unwrap());

/// `->references('id')->on('users')` inside a foreign chain
static REFERENCES_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"->references\(['"`]([^'"`]+)['"`]\)->on\(['"`]([^'"`]+)['"`]\)"#).unwrap()
});

static ON_DELETE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"->onDelete\(['"`]([^'"`]+)['"`]\)"#).unwrap());

static ON_UPDATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"->onUpdate\(['"`]([^'"`]+)['"`]\)"#).unwrap());

/// `$table-><method>(<first args>)<remainder chain>`
static COLUMN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\w+->(\w+)\(([^)]*)\)(.*)").unwrap());

/// `->default(<value>)`; the value stops at the first closing paren
static DEFAULT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"->default\(([^)]+)\)").unwrap());

/// Classify one statement; `None` means it matched no recognized shape
/// and is to be skipped.
///
/// Checks are ordered and the first class wins: a statement mentioning
/// `dropColumn` that then fails its detail pattern is dropped, it never
/// falls through to the column fallback.
pub fn parse_statement(statement: &str) -> Option<Operation> {
    if statement.contains("->dropColumn(") {
        return parse_drop_columns(statement);
    }
    if statement.contains("->foreign(") {
        return parse_foreign_key(statement);
    }
    parse_column(statement)
}

fn parse_drop_columns(statement: &str) -> Option<Operation> {
    let cap = DROP_COLUMN_REGEX.captures(statement)?;
    let columns = cap[1].split(',').map(strip_quotes).collect();
    Some(Operation::DropColumns(columns))
}

fn parse_foreign_key(statement: &str) -> Option<Operation> {
    let cap = FOREIGN_REGEX.captures(statement)?;
    let column = cap[1].to_string();
    let chain = &cap[2];

    // references()->on() may be absent; the reference then stays empty
    let (ref_column, ref_table) = REFERENCES_REGEX
        .captures(chain)
        .map(|r| (r[1].to_string(), r[2].to_string()))
        .unwrap_or_default();

    let reference = ForeignKeyReference {
        table: ref_table,
        column: ref_column,
        on_delete: ON_DELETE_REGEX.captures(chain).map(|c| c[1].to_string()),
        on_update: ON_UPDATE_REGEX.captures(chain).map(|c| c[1].to_string()),
    };

    Some(Operation::AddForeignKey { column, reference })
}

fn parse_column(statement: &str) -> Option<Operation> {
    let cap = COLUMN_REGEX.captures(statement)?;
    let column_type = &cap[1];
    let args = &cap[2];
    let chain = &cap[3];

    // First argument is the column name; empty when the call took none
    let name = args.split(',').next().map(strip_quotes).unwrap_or_default();

    let mut column = ColumnDefinition::new(name, column_type);
    column.unique = chain.contains("->unique()");
    column.nullable = chain.contains("->nullable()");
    column.primary = chain.contains("->primary()");
    column.default = DEFAULT_REGEX.captures(chain).map(|c| strip_quotes(&c[1]));

    Some(Operation::AddOrModifyColumn(column))
}

/// Trim and remove one layer of surrounding quotes (single, double or
/// backtick), each side independently.
fn strip_quotes(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix(['\'', '"', '`']).unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix(['\'', '"', '`']).unwrap_or(trimmed);
    trimmed.to_string()
}
