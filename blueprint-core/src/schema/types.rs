//! Schema types - the reconstructed logical database schema

use serde::{Deserialize, Serialize};

/// A declared relationship from one column to a column in another table.
///
/// `table` and `column` stay empty when the source chain never called
/// `references()->on()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeyReference {
    /// Referenced table
    pub table: String,
    /// Referenced column (usually "id")
    pub column: String,
    /// Raw action keyword of an `onDelete(...)` call, if any
    #[serde(rename = "onDelete", skip_serializing_if = "Option::is_none", default)]
    pub on_delete: Option<String>,
    /// Raw action keyword of an `onUpdate(...)` call, if any
    #[serde(rename = "onUpdate", skip_serializing_if = "Option::is_none", default)]
    pub on_update: Option<String>,
}

/// One column of one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Column name (first argument of the declaring call; may be empty
    /// when the call took no arguments, e.g. `$table->id()`)
    pub name: String,
    /// Raw builder method name used to declare the column
    /// (e.g. "string", "integer", "unsignedBigInteger"); not validated
    /// against any fixed vocabulary
    #[serde(rename = "type")]
    pub column_type: String,
    #[serde(skip_serializing_if = "is_false", default)]
    pub nullable: bool,
    #[serde(skip_serializing_if = "is_false", default)]
    pub unique: bool,
    #[serde(skip_serializing_if = "is_false", default)]
    pub primary: bool,
    /// Raw literal text of a `default(...)` argument, quotes stripped
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub references: Option<ForeignKeyReference>,
}

impl ColumnDefinition {
    /// A bare column with all flags unset.
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
            nullable: false,
            unique: false,
            primary: false,
            default: None,
            references: None,
        }
    }
}

/// The final structure of one table after replaying every migration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDefinition {
    /// Table name
    pub name: String,
    /// Columns in order of first declaration
    pub columns: Vec<ColumnDefinition>,
}

impl TableDefinition {
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
