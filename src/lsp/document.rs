use ropey::Rope;

use thiserror::Error;

use tower_lsp::lsp_types::{Position, TextDocumentContentChangeEvent};

pub use crate::lsp::models::{LspDocument, LspDocumentState};

/// Reasons a content change is rejected. The document is left untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("version {received} is not newer than {current}")]
    StaleVersion { received: i32, current: i32 },

    #[error("position {line}:{character} is outside the document")]
    PositionOutOfRange { line: u32, character: u32 },
}

/// Converts an LSP position to a char index in the Rope.
///
/// Characters are counted as Unicode scalar values, the unit used for columns
/// throughout the analyzers.
fn position_to_char_index(position: &Position, text: &Rope) -> Result<usize, DocumentError> {
    let out_of_range = || DocumentError::PositionOutOfRange {
        line: position.line,
        character: position.character,
    };

    let line = position.line as usize;
    if line >= text.len_lines() {
        return Err(out_of_range());
    }
    let line_start = text.line_to_char(line);
    let line_end = if line + 1 < text.len_lines() {
        text.line_to_char(line + 1)
    } else {
        text.len_chars()
    };
    let index = line_start + position.character as usize;
    if index > line_end {
        return Err(out_of_range());
    }
    Ok(index)
}

impl LspDocumentState {
    /// Applies a list of content changes if `version` is newer than the current one.
    ///
    /// Changes are applied to a copy, so a rejected change leaves the text as it was.
    pub fn apply(
        &mut self,
        changes: Vec<TextDocumentContentChangeEvent>,
        version: i32,
    ) -> Result<(), DocumentError> {
        if version <= self.version {
            return Err(DocumentError::StaleVersion {
                received: version,
                current: self.version,
            });
        }
        let mut text = self.text.clone();
        for change in &changes {
            if let Some(range) = change.range {
                let start = position_to_char_index(&range.start, &text)?;
                let end = position_to_char_index(&range.end, &text)?.max(start);
                text.remove(start..end);
                text.insert(start, &change.text);
            } else {
                text = Rope::from_str(&change.text);
            }
        }
        self.text = text;
        self.version = version;
        Ok(())
    }
}

impl LspDocument {
    pub fn new(text: &str, version: i32) -> Self {
        Self {
            state: tokio::sync::RwLock::new(LspDocumentState {
                text: Rope::from_str(text),
                version,
            }),
        }
    }

    /// Returns the current text of the document as a string.
    pub async fn text(&self) -> String {
        self.state.read().await.text.to_string()
    }

    /// Returns a cheap copy of the current text for analysis off the lock.
    pub async fn snapshot(&self) -> Rope {
        self.state.read().await.text.clone()
    }

    /// Returns the current version of the document.
    pub async fn version(&self) -> i32 {
        self.state.read().await.version
    }

    /// Applies changes to the document.
    pub async fn apply(
        &self,
        changes: Vec<TextDocumentContentChangeEvent>,
        version: i32,
    ) -> Result<(), DocumentError> {
        let mut state = self.state.write().await;
        state.apply(changes, version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower_lsp::lsp_types::Range;

    fn create_test_document(text: &str) -> LspDocument {
        LspDocument::new(text, 0)
    }

    fn edit(start: (u32, u32), end: (u32, u32), text: &str) -> TextDocumentContentChangeEvent {
        TextDocumentContentChangeEvent {
            range: Some(Range {
                start: Position { line: start.0, character: start.1 },
                end: Position { line: end.0, character: end.1 },
            }),
            range_length: None,
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_apply_full_change() {
        let doc = create_test_document("a := 1");
        let changes = vec![TextDocumentContentChangeEvent {
            range: None,
            range_length: None,
            text: "b := 2".to_string(),
        }];

        assert_eq!(doc.apply(changes, 1).await, Ok(()));
        assert_eq!(doc.text().await, "b := 2");
        assert_eq!(doc.version().await, 1);
    }

    #[tokio::test]
    async fn test_apply_multiple_incremental() {
        let doc = create_test_document("width := 1\nheight := 2");
        let changes = vec![edit((1, 10), (1, 11), "20"), edit((0, 0), (0, 5), "depth")];

        assert_eq!(doc.apply(changes, 1).await, Ok(()));
        assert_eq!(doc.text().await, "depth := 1\nheight := 20");
    }

    #[tokio::test]
    async fn test_apply_outdated_version() {
        let doc = create_test_document("a := 1");
        let changes = vec![edit((0, 5), (0, 6), "2")];

        assert_eq!(doc.apply(changes.clone(), 2).await, Ok(()));
        assert_eq!(
            doc.apply(changes, 1).await,
            Err(DocumentError::StaleVersion { received: 1, current: 2 })
        );
        assert_eq!(doc.text().await, "a := 2");
        assert_eq!(doc.version().await, 2);
    }

    #[tokio::test]
    async fn test_apply_out_of_range_leaves_text() {
        let doc = create_test_document("a := 1");
        let changes = vec![edit((0, 0), (0, 1), "b"), edit((5, 0), (5, 1), "x")];

        assert_eq!(
            doc.apply(changes, 1).await,
            Err(DocumentError::PositionOutOfRange { line: 5, character: 0 })
        );
        assert_eq!(doc.text().await, "a := 1");
        assert_eq!(doc.version().await, 0);
    }
}
