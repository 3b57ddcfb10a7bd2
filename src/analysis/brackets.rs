//! Forward bracket matching across line boundaries.

use crate::text::{Position, SourceText};

/// The three bracket families recognised by the analyzers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketKind {
    Paren,
    Square,
    Curly,
}

impl BracketKind {
    pub const ALL: [BracketKind; 3] = [BracketKind::Paren, BracketKind::Square, BracketKind::Curly];

    pub const fn open(self) -> char {
        match self {
            BracketKind::Paren => '(',
            BracketKind::Square => '[',
            BracketKind::Curly => '{',
        }
    }

    pub const fn close(self) -> char {
        match self {
            BracketKind::Paren => ')',
            BracketKind::Square => ']',
            BracketKind::Curly => '}',
        }
    }

    /// Bracket family opened by `c`, if any.
    pub fn opened_by(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.open() == c)
    }
}

/// Finds the bracket closing the one of `kind` opened at `start`.
///
/// Scanning begins one column after `start` and continues onto following
/// lines. Only brackets of `kind` affect the depth; other families are
/// ignored. Lines at or beyond `max_lines` are never read, so an unterminated
/// bracket in a huge document costs at most `max_lines` line reads.
///
/// Returns `None` for an unterminated bracket.
pub fn find_match<T: SourceText + ?Sized>(
    text: &T,
    start: Position,
    kind: BracketKind,
    max_lines: usize,
) -> Option<Position> {
    let (open, close) = (kind.open(), kind.close());
    let last_line = text.line_count().min(max_lines);
    let mut depth = 1usize;

    for line in start.line..last_line {
        let Some(content) = text.line(line) else {
            break;
        };
        let skip = if line == start.line { start.column + 1 } else { 0 };

        for (column, c) in content.chars().enumerate().skip(skip) {
            if c == open {
                depth += 1;
            } else if c == close {
                depth -= 1;
                if depth == 0 {
                    return Some(Position::new(line, column));
                }
            }
        }
    }

    None
}
