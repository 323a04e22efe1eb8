//! Operation types produced by the statement parser

use crate::schema::{ColumnDefinition, ForeignKeyReference};

/// One structured operation derived from a single `$table->...;`
/// statement, ready to be replayed against the accumulating schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// `dropColumn('a', 'b')` - remove the named columns if present
    DropColumns(Vec<String>),
    /// `foreign('user_id')->references('id')->on('users')...`
    AddForeignKey {
        column: String,
        reference: ForeignKeyReference,
    },
    /// Any other builder call; the method name becomes the column type
    AddOrModifyColumn(ColumnDefinition),
}
