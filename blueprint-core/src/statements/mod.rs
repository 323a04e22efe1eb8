//! Statement module - splitting and parsing of builder statements
//!
//! Turns a raw block body into an ordered sequence of structured
//! operations for the accumulator to replay.

mod parser;
mod splitter;
mod types;

pub use parser::parse_statement;
pub use splitter::split_statements;
pub use types::Operation;
