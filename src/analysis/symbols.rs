//! Document symbol table.
//!
//! The table is rebuilt from scratch on every request with a single forward
//! pass: each line is classified, and a line that declares something is
//! extended to the end of its bracketed body. Lines swallowed by a multi-line
//! definition are not classified again.

use tracing::{debug, trace};

use super::classifier::{BlockVariant, Classification, classify};
use super::span::end_of_definition;
use crate::cancellation::CancellationToken;
use crate::config::AnalysisConfig;
use crate::text::{Position, SourceText, Span};

/// Kind of a document symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Unknown,
    NamedBlock { variant: BlockVariant },
    Variable,
    Function,
}

/// A definition found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRecord {
    pub name: String,
    pub kind: SymbolKind,
    /// Always starts at column 0 of the header line.
    pub definition_range: Span,
    /// Location of the identifier on the header line.
    pub name_range: Span,
}

impl SymbolRecord {
    fn from_classification(classification: Classification, line: usize, end: Position) -> Option<Self> {
        let name_range = classification.name_span(line)?;
        let (name, kind) = match classification {
            Classification::NamedBlock { variant, name, .. } => (name, SymbolKind::NamedBlock { variant }),
            Classification::Function { name } => (name, SymbolKind::Function),
            Classification::Variable { name } => (name, SymbolKind::Variable),
            Classification::Skip | Classification::None => return None,
        };
        if name.is_empty() {
            return None;
        }

        Some(Self {
            name,
            kind,
            definition_range: Span::new(Position::new(line, 0), end),
            name_range,
        })
    }
}

/// Builds symbol tables under a fixed line ceiling.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolTableBuilder {
    config: AnalysisConfig,
}

impl SymbolTableBuilder {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Scans `text` top to bottom and returns its definitions in document order.
    ///
    /// `cancel` is polled once per line; when raised, the symbols collected so
    /// far are returned. Lines beyond the configured ceiling are ignored.
    pub fn build<T, C>(&self, text: &T, cancel: &C) -> Vec<SymbolRecord>
    where
        T: SourceText + ?Sized,
        C: CancellationToken + ?Sized,
    {
        let max_lines = self.config.max_lines;
        let line_count = text.line_count();
        if line_count > max_lines {
            debug!("Document has {} lines, scanning only the first {}", line_count, max_lines);
        }
        let last_line = line_count.min(max_lines);

        let mut symbols = Vec::new();
        let mut line = 0;
        while line < last_line {
            if cancel.is_cancelled() {
                debug!("Symbol scan cancelled at line {} with {} symbols", line, symbols.len());
                return symbols;
            }

            let Some(content) = text.line(line) else {
                break;
            };
            let classification = classify(&content);
            if classification.name().is_some() {
                let end = end_of_definition(text, line, max_lines);
                if let Some(symbol) = SymbolRecord::from_classification(classification, line, end) {
                    trace!("Found {:?} '{}' at lines {}..={}", symbol.kind, symbol.name, line, end.line);
                    symbols.push(symbol);
                }
                line = end.line.max(line);
            }
            line += 1;
        }

        debug!("Collected {} symbols", symbols.len());
        symbols
    }
}

/// Builds the symbol table of `text` with the default configuration.
pub fn build_symbol_table<T, C>(text: &T, cancel: &C) -> Vec<SymbolRecord>
where
    T: SourceText + ?Sized,
    C: CancellationToken + ?Sized,
{
    SymbolTableBuilder::default().build(text, cancel)
}
