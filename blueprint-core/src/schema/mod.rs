//! Schema module - data model and replay accumulator
//!
//! Owns the evolving table-name -> definition mapping and the rules for
//! applying create/alter/drop operations to it.

mod accumulator;
mod types;

pub use accumulator::SchemaAccumulator;
pub use types::{ColumnDefinition, ForeignKeyReference, TableDefinition};
