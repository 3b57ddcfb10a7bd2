//! Cursor context for completion.
//!
//! Completion only looks at the text of the cursor's line:
//!
//! ```text
//! x := Fcs.Action.Lo|
//!                 ^^ current word "Lo"
//!      ^^^^^^^^^^^^^ prior dotted word "Fcs.Action.Lo"
//!                ^ dot immediately before the current word
//! ```

use crate::text::{Position, SourceText, Span};

/// What surrounds the cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorContext {
    /// Word containing or touching the cursor.
    pub current_word: Option<String>,
    /// Dotted identifier run ending at the cursor, including the typed part of
    /// the current word.
    pub prior_dotted_word: Option<String>,
    /// Whether a `.` sits right before the start of the current word (or right
    /// before the cursor when there is no current word).
    pub dot_before_cursor: bool,
}

impl CursorContext {
    /// Derives the context at `position`. Positions past the line end are
    /// clamped to it; a position past the document yields an empty context.
    pub fn at<T: SourceText + ?Sized>(text: &T, position: Position) -> Self {
        let Some(line) = text.line(position.line) else {
            return Self::default();
        };
        let chars: Vec<char> = line.chars().collect();
        let column = position.column.min(chars.len());

        let word_range = text.word_range_at(Position::new(position.line, column));
        let current_word = word_range.map(|Span { start, end }| chars[start.column..end.column].iter().collect());

        let word_start = word_range.map_or(column, |range| range.start.column);
        let dot_before_cursor = word_start > 0 && chars[word_start - 1] == '.';

        Self {
            current_word,
            prior_dotted_word: prior_dotted_word(&chars[..column]),
            dot_before_cursor,
        }
    }

    /// Number of dots in the prior dotted word.
    pub fn number_of_dots(&self) -> usize {
        self.prior_dotted_word
            .as_deref()
            .map_or(0, |word| word.matches('.').count())
    }
}

fn is_dotted_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

/// Longest `[A-Za-z][A-Za-z0-9_.]*` ending exactly at the end of `before`.
fn prior_dotted_word(before: &[char]) -> Option<String> {
    let run_start = before
        .iter()
        .rposition(|c| !is_dotted_word_char(*c))
        .map_or(0, |index| index + 1);
    let run = &before[run_start..];
    let word_start = run.iter().position(|c| c.is_ascii_alphabetic())?;
    Some(run[word_start..].iter().collect())
}
