//! Line-oriented symbol analysis.
//!
//! The analysis is lexical and best-effort: definitions are recognised only
//! when they start a line, and their extent is estimated from bracket nesting.
//! Malformed input never produces an error, only fewer or shorter symbols.

pub mod brackets;
pub mod classifier;
pub mod definition;
pub mod span;
pub mod symbols;

pub use brackets::{BracketKind, find_match};
pub use classifier::{BlockVariant, Classification, classify};
pub use definition::{DefinitionLink, locate_definition};
pub use span::end_of_definition;
pub use symbols::{SymbolKind, SymbolRecord, SymbolTableBuilder, build_symbol_table};
