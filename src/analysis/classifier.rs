//! Single-line recognition of definition headers.
//!
//! Three header shapes are recognised, all anchored at column 0:
//!
//! ```text
//! gblock {Name}            named block (also `gclass {Name}`)
//! name := (a, b) => ...    function (`=` also accepted, parentheses optional)
//! name := ...              variable
//! ```
//!
//! Matching is done with a small cursor over the line's characters rather than
//! regular expressions so that anchoring and greediness are explicit.

use crate::text::Span;

/// Flavour of a `gblock`/`gclass` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockVariant {
    Block,
    Class,
}

/// What a single line declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Blank, indented or comment line. Never starts a definition.
    Skip,
    /// No definition on this line.
    None,
    NamedBlock {
        variant: BlockVariant,
        name: String,
        /// Columns of the name within the line.
        name_columns: (usize, usize),
    },
    Function { name: String },
    Variable { name: String },
}

impl Classification {
    /// Declared name, if the line declares anything.
    pub fn name(&self) -> Option<&str> {
        match self {
            Classification::NamedBlock { name, .. }
            | Classification::Function { name }
            | Classification::Variable { name } => Some(name),
            Classification::Skip | Classification::None => None,
        }
    }

    /// Range of the declared name on line `line`.
    pub fn name_span(&self, line: usize) -> Option<Span> {
        match self {
            Classification::NamedBlock { name_columns: (start, end), .. } => {
                Some(Span::on_line(line, *start, *end))
            }
            Classification::Function { name } | Classification::Variable { name } => {
                Some(Span::on_line(line, 0, name.chars().count()))
            }
            Classification::Skip | Classification::None => None,
        }
    }
}

const BLOCK_KEYWORD: &str = "gblock ";
const CLASS_KEYWORD: &str = "gclass ";

/// Classifies one line of source. The first matching rule wins:
/// skip lines, then block headers, then function headers, then variable headers.
pub fn classify(line: &str) -> Classification {
    if line.is_empty() || line.starts_with(' ') || line.starts_with('#') {
        return Classification::Skip;
    }

    let variant = if line.starts_with(BLOCK_KEYWORD) {
        Some(BlockVariant::Block)
    } else if line.starts_with(CLASS_KEYWORD) {
        Some(BlockVariant::Class)
    } else {
        None
    };
    if let Some(variant) = variant {
        return match block_name(line) {
            Some((name, name_columns)) => Classification::NamedBlock { variant, name, name_columns },
            None => Classification::None,
        };
    }

    if !line.contains('=') {
        return Classification::None;
    }
    if let Some(name) = function_name(line) {
        return Classification::Function { name };
    }
    match variable_name(line) {
        Some(name) => Classification::Variable { name },
        None => Classification::None,
    }
}

/// Character cursor used by the header matchers.
struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    fn new(line: &str) -> Self {
        Self {
            chars: line.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_str(&mut self, expected: &str) -> bool {
        let start = self.pos;
        if expected.chars().all(|c| self.eat(c)) {
            true
        } else {
            self.pos = start;
            false
        }
    }

    /// Consumes a run of characters matching `pred`, returning its length.
    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
        self.pos - start
    }

    fn skip_whitespace(&mut self) -> usize {
        self.eat_while(char::is_whitespace)
    }

    /// `[A-Za-z][A-Za-z0-9_]*`, returning its text and column range.
    fn identifier(&mut self) -> Option<(String, (usize, usize))> {
        let start = self.pos;
        if !self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        self.pos += 1;
        self.eat_while(|c| c.is_ascii_alphanumeric() || c == '_');
        let name = self.chars[start..self.pos].iter().collect();
        Some((name, (start, self.pos)))
    }

    /// `:=` or `=`.
    fn assignment(&mut self) -> bool {
        self.eat_str(":=") || self.eat('=')
    }
}

/// `g(block|class)\s+\{identifier\}` at line start.
fn block_name(line: &str) -> Option<(String, (usize, usize))> {
    let mut cursor = Cursor::new(line);
    if !(cursor.eat_str("gblock") || cursor.eat_str("gclass")) {
        return None;
    }
    if cursor.skip_whitespace() == 0 || !cursor.eat('{') {
        return None;
    }
    let identifier = cursor.identifier()?;
    cursor.eat('}').then_some(identifier)
}

/// `identifier\s*(:=|=)` at line start, leaving the cursor after the marker.
fn assignment_header(cursor: &mut Cursor) -> Option<String> {
    let (name, _) = cursor.identifier()?;
    cursor.skip_whitespace();
    cursor.assignment().then_some(name)
}

fn is_parameter_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == ',' || c.is_whitespace()
}

/// `identifier\s*(:=|=)\s*(params)\s*=>` or the same without parentheses.
///
/// Unparenthesised parameters must start with a letter; a parenthesised list
/// may be empty.
fn function_name(line: &str) -> Option<String> {
    if !line.contains("=>") {
        return None;
    }

    let mut cursor = Cursor::new(line);
    let name = assignment_header(&mut cursor)?;
    cursor.skip_whitespace();

    if cursor.eat('(') {
        cursor.skip_whitespace();
        if cursor.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            cursor.eat_while(is_parameter_char);
        }
        if !cursor.eat(')') {
            return None;
        }
        cursor.skip_whitespace();
    } else {
        if !cursor.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        cursor.eat_while(is_parameter_char);
    }

    cursor.eat_str("=>").then_some(name)
}

fn variable_name(line: &str) -> Option<String> {
    assignment_header(&mut Cursor::new(line))
}
