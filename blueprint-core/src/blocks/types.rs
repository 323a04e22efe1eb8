//! Types for schema block extraction

/// One `Schema::create(...)` or `Schema::table(...)` call lifted out of
/// a migration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaBlock {
    /// Unquoted table name (first argument of the call)
    pub table: String,
    /// Name of the closure's table-builder parameter, without the `$`
    /// (conventionally "table")
    pub param: String,
    /// Raw closure body between the braces
    pub body: String,
}
