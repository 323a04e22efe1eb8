//! Replays parsed operations into the final schema snapshot.

use indexmap::IndexMap;

use super::types::{ColumnDefinition, TableDefinition};
use crate::statements::Operation;

/// Accumulates table definitions while migrations are replayed.
///
/// Tables iterate in first-seen order and columns in first-declared
/// order. Merging is additive: a later statement for an existing column
/// only ever asserts `true` flags, so `nullable`/`unique`/`primary` can
/// never be cleared once set. That quirk is part of the extraction
/// contract and is preserved on purpose.
#[derive(Debug, Default)]
pub struct SchemaAccumulator {
    tables: IndexMap<String, TableDefinition>,
}

impl SchemaAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replay a `Schema::create` block: the table is rebuilt from an
    /// empty column list, discarding any prior definition. Re-inserting
    /// an existing key keeps its original position, so the table stays
    /// where it was first seen.
    pub fn apply_create(&mut self, table: &str, operations: Vec<Operation>) {
        let mut columns = Vec::new();
        for op in operations {
            apply_operation(&mut columns, op);
        }
        self.tables.insert(
            table.to_string(),
            TableDefinition {
                name: table.to_string(),
                columns,
            },
        );
    }

    /// Replay a `Schema::table` block against the existing definition,
    /// creating an empty one first when the table was never created.
    pub fn apply_alter(&mut self, table: &str, operations: Vec<Operation>) {
        let entry = self
            .tables
            .entry(table.to_string())
            .or_insert_with(|| TableDefinition::empty(table));
        for op in operations {
            apply_operation(&mut entry.columns, op);
        }
    }

    /// Final snapshot, tables in first-seen order.
    pub fn into_tables(self) -> Vec<TableDefinition> {
        self.tables.into_values().collect()
    }
}

fn apply_operation(columns: &mut Vec<ColumnDefinition>, op: Operation) {
    match op {
        Operation::DropColumns(names) => {
            for name in names {
                columns.retain(|c| c.name != name);
            }
        }
        Operation::AddForeignKey { column, reference } => {
            if let Some(existing) = columns.iter_mut().find(|c| c.name == column) {
                existing.references = Some(reference);
            } else {
                // No prior column: materialize the conventional FK
                // column on the fly
                let mut fresh = ColumnDefinition::new(column, "unsignedBigInteger");
                fresh.references = Some(reference);
                columns.push(fresh);
            }
        }
        Operation::AddOrModifyColumn(def) => {
            if let Some(existing) = columns.iter_mut().find(|c| c.name == def.name) {
                merge_column(existing, def);
            } else {
                columns.push(def);
            }
        }
    }
}

/// Merge a redeclaration onto an existing column. Type is overwritten
/// unconditionally; flags only ever go from false to true; the default
/// is replaced only when the new statement declared one; any foreign
/// key reference on the existing column survives untouched.
fn merge_column(existing: &mut ColumnDefinition, def: ColumnDefinition) {
    existing.column_type = def.column_type;
    if def.nullable {
        existing.nullable = true;
    }
    if def.unique {
        existing.unique = true;
    }
    if def.primary {
        existing.primary = true;
    }
    if def.default.is_some() {
        existing.default = def.default;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ForeignKeyReference;

    fn column(name: &str, column_type: &str) -> ColumnDefinition {
        ColumnDefinition::new(name, column_type)
    }

    #[test]
    fn test_create_replaces_prior_definition() {
        let mut acc = SchemaAccumulator::new();
        acc.apply_create(
            "users",
            vec![Operation::AddOrModifyColumn(column("legacy", "text"))],
        );
        acc.apply_create(
            "users",
            vec![Operation::AddOrModifyColumn(column("email", "string"))],
        );

        let tables = acc.into_tables();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].columns.len(), 1);
        assert_eq!(tables[0].columns[0].name, "email");
    }

    #[test]
    fn test_alter_on_unknown_table_creates_empty_definition() {
        let mut acc = SchemaAccumulator::new();
        acc.apply_alter(
            "ghosts",
            vec![Operation::AddOrModifyColumn(column("name", "string"))],
        );

        let tables = acc.into_tables();
        assert_eq!(tables[0].name, "ghosts");
        assert_eq!(tables[0].columns[0].name, "name");
    }

    #[test]
    fn test_flags_are_sticky_across_redeclaration() {
        let mut nullable = column("bio", "text");
        nullable.nullable = true;

        let mut acc = SchemaAccumulator::new();
        acc.apply_create("users", vec![Operation::AddOrModifyColumn(nullable)]);
        acc.apply_alter(
            "users",
            vec![Operation::AddOrModifyColumn(column("bio", "string"))],
        );

        let tables = acc.into_tables();
        let bio = &tables[0].columns[0];
        assert_eq!(bio.column_type, "string");
        assert!(bio.nullable, "redeclaration must not clear the flag");
    }

    #[test]
    fn test_merge_keeps_default_when_not_redeclared() {
        let mut with_default = column("status", "string");
        with_default.default = Some("draft".to_string());

        let mut acc = SchemaAccumulator::new();
        acc.apply_create("posts", vec![Operation::AddOrModifyColumn(with_default)]);
        acc.apply_alter(
            "posts",
            vec![Operation::AddOrModifyColumn(column("status", "string"))],
        );

        let tables = acc.into_tables();
        assert_eq!(tables[0].columns[0].default.as_deref(), Some("draft"));
    }

    #[test]
    fn test_drop_absent_column_is_noop() {
        let mut acc = SchemaAccumulator::new();
        acc.apply_create(
            "users",
            vec![
                Operation::AddOrModifyColumn(column("a", "string")),
                Operation::DropColumns(vec!["a".to_string(), "missing".to_string()]),
            ],
        );
        assert!(acc.into_tables()[0].columns.is_empty());
    }

    #[test]
    fn test_foreign_key_attaches_to_existing_column() {
        let reference = ForeignKeyReference {
            table: "users".to_string(),
            column: "id".to_string(),
            on_delete: None,
            on_update: None,
        };

        let mut acc = SchemaAccumulator::new();
        acc.apply_create(
            "posts",
            vec![
                Operation::AddOrModifyColumn(column("user_id", "unsignedBigInteger")),
                Operation::AddForeignKey {
                    column: "user_id".to_string(),
                    reference: reference.clone(),
                },
            ],
        );

        let tables = acc.into_tables();
        assert_eq!(tables[0].columns.len(), 1);
        assert_eq!(tables[0].columns[0].references.as_ref(), Some(&reference));
    }

    #[test]
    fn test_tables_iterate_in_first_seen_order() {
        let mut acc = SchemaAccumulator::new();
        acc.apply_create("users", vec![]);
        acc.apply_create("posts", vec![]);
        acc.apply_create("users", vec![]);

        let names: Vec<_> = acc.into_tables().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["users", "posts"]);
    }
}
