//! Read-only access to document text for the analyzers.
//!
//! Positions are zero-based `(line, column)` pairs where the column counts
//! characters within the line (line terminators excluded). The analyzers never
//! mutate text; they only ask for line counts and individual lines.

use std::borrow::Cow;

use ropey::Rope;

/// A zero-based position in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A half-open range `[start, end)` between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Span covering `[start_column, end_column)` on a single line.
    pub const fn on_line(line: usize, start_column: usize, end_column: usize) -> Self {
        Self {
            start: Position::new(line, start_column),
            end: Position::new(line, end_column),
        }
    }
}

/// Characters that make up a word for word-range lookups.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Host-supplied access to the lines of a document.
pub trait SourceText {
    /// Number of lines in the document. A trailing newline opens a final empty line.
    fn line_count(&self) -> usize;

    /// Text of line `index` without its terminator, or `None` past the end.
    fn line(&self, index: usize) -> Option<Cow<'_, str>>;

    /// Range of the maximal run of word characters touching `position`.
    ///
    /// A cursor placed directly after a word still resolves to that word.
    /// Returns `None` when no word character is adjacent to the cursor.
    fn word_range_at(&self, position: Position) -> Option<Span> {
        let text = self.line(position.line)?;
        let chars: Vec<char> = text.chars().collect();
        let column = position.column.min(chars.len());

        let mut start = column;
        while start > 0 && is_word_char(chars[start - 1]) {
            start -= 1;
        }
        let mut end = column;
        while end < chars.len() && is_word_char(chars[end]) {
            end += 1;
        }

        (start < end).then(|| Span::on_line(position.line, start, end))
    }

    /// Text covered by a single-line span.
    fn text_in(&self, span: Span) -> Option<String> {
        if span.start.line != span.end.line {
            return None;
        }
        let text = self.line(span.start.line)?;
        Some(
            text.chars()
                .skip(span.start.column)
                .take(span.end.column.saturating_sub(span.start.column))
                .collect(),
        )
    }
}

/// Number of characters in a line, the unit used for columns.
pub fn line_length(text: &str) -> usize {
    text.chars().count()
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

impl SourceText for Rope {
    fn line_count(&self) -> usize {
        self.len_lines()
    }

    fn line(&self, index: usize) -> Option<Cow<'_, str>> {
        if index >= self.len_lines() {
            return None;
        }
        let line: Cow<'_, str> = self.line(index).into();
        Some(match line {
            Cow::Borrowed(s) => Cow::Borrowed(strip_terminator(s)),
            Cow::Owned(s) => Cow::Owned(strip_terminator(&s).to_string()),
        })
    }
}

/// Line index over borrowed text.
#[derive(Debug, Clone)]
pub struct SourceLines<'a> {
    lines: Vec<&'a str>,
}

impl<'a> SourceLines<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.split('\n').map(strip_terminator).collect(),
        }
    }
}

impl SourceText for SourceLines<'_> {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Option<Cow<'_, str>> {
        self.lines.get(index).map(|line| Cow::Borrowed(*line))
    }
}
