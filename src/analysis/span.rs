//! Textual extent of a line-initial definition.
//!
//! Definitions begin at column 0 but their bodies (arrow bodies, array and
//! record literals) may run over several lines. The resolver walks the chain
//! of bracketed constructs starting on the header line and reports where the
//! last one closes. This is an estimate, not a parse: brackets inside string
//! literals or comments are counted like any others.

use tracing::trace;

use super::brackets::{BracketKind, find_match};
use crate::text::{Position, SourceText, line_length};

/// Earliest opening bracket at or after `from` in `line`.
fn first_opening_bracket(line: &str, from: usize) -> Option<(usize, BracketKind)> {
    line.chars()
        .enumerate()
        .skip(from)
        .find_map(|(column, c)| BracketKind::opened_by(c).map(|kind| (column, kind)))
}

/// End of the definition starting on `start_line`.
///
/// The end column is always the full length of the end line, so a span built
/// from `(start_line, 0)` to the result covers trailing content after the
/// closing bracket. With no bracket, or only an unterminated one, the
/// definition is the header line alone.
pub fn end_of_definition<T: SourceText + ?Sized>(
    text: &T,
    start_line: usize,
    max_lines: usize,
) -> Position {
    let Some(header) = text.line(start_line) else {
        return Position::new(start_line, 0);
    };
    let header_end = Position::new(start_line, line_length(&header));

    let mut cursor = Position::new(start_line, 0);
    let mut current = header.into_owned();
    let mut last_close_line = None;

    while let Some((column, kind)) = first_opening_bracket(&current, cursor.column) {
        let Some(close) = find_match(text, Position::new(cursor.line, column), kind, max_lines) else {
            trace!("Unterminated {:?} at {}:{}", kind, cursor.line, column);
            break;
        };

        last_close_line = Some(close.line);
        if close.line != cursor.line {
            match text.line(close.line) {
                Some(line) => current = line.into_owned(),
                None => break,
            }
        }
        cursor = Position::new(close.line, close.column + 1);
    }

    match last_close_line {
        Some(line) if line != start_line => Position::new(line, line_length(&current)),
        _ => header_end,
    }
}
