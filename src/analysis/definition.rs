//! Go-to-definition over the document symbol table.

use tracing::debug;

use super::symbols::{SymbolRecord, SymbolTableBuilder};
use crate::cancellation::CancellationToken;
use crate::text::{Position, SourceText, Span};

/// Where a name under the cursor is defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionLink {
    /// Word range under the cursor that was looked up.
    pub origin: Span,
    /// The first definition of that name in the document.
    pub target: SymbolRecord,
}

impl DefinitionLink {
    pub fn target_range(&self) -> Span {
        self.target.definition_range
    }

    pub fn target_selection_range(&self) -> Span {
        self.target.name_range
    }
}

/// Resolves the identifier at `position` to its first definition in `text`.
///
/// No scoping is applied: the earliest definition with an equal name wins.
pub fn locate_definition<T, C>(
    builder: &SymbolTableBuilder,
    text: &T,
    position: Position,
    cancel: &C,
) -> Option<DefinitionLink>
where
    T: SourceText + ?Sized,
    C: CancellationToken + ?Sized,
{
    let origin = text.word_range_at(position)?;
    let word = text.text_in(origin).filter(|word| !word.is_empty())?;

    let target = builder
        .build(text, cancel)
        .into_iter()
        .find(|symbol| symbol.name == word);

    match target {
        Some(target) => Some(DefinitionLink { origin, target }),
        None => {
            debug!("No definition found for '{}'", word);
            None
        }
    }
}
