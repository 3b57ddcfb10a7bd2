//! Depth- and prefix-based catalog filtering.

use tracing::debug;

use super::catalog::{Catalog, CatalogEntry, Depth};
use super::context::CursorContext;
use crate::text::{Position, SourceText};

/// Catalog entries matching the cursor context, in catalog order.
///
/// A dotted prior word selects entries at exactly that nesting depth whose
/// full path extends it. When that finds nothing, entries at the current depth
/// are matched against the current word alone; after a dot this depth is
/// [`Depth::Any`], so members valid on any receiver are offered.
///
/// The fallback uses [`Depth::Any`] whenever a dot precedes the current word,
/// even when the dotted word before it names an unknown receiver (`xs.Sel`).
pub fn matching_entries<'c>(catalog: &'c Catalog, context: &CursorContext) -> Vec<&'c CatalogEntry> {
    let dots = context.number_of_dots();

    if dots > 0 {
        let prior = context.prior_dotted_word.as_deref().unwrap_or_default();
        let nested: Vec<_> = filter(catalog, Depth::Level(dots), prior);
        if !nested.is_empty() {
            return nested;
        }
    }

    let depth = if context.dot_before_cursor {
        Depth::Any
    } else {
        Depth::Level(dots)
    };
    filter(catalog, depth, context.current_word.as_deref().unwrap_or_default())
}

fn filter<'c>(catalog: &'c Catalog, depth: Depth, prefix: &str) -> Vec<&'c CatalogEntry> {
    catalog
        .iter()
        .filter(|entry| entry.depth == depth && entry.dotted_path.starts_with(prefix))
        .collect()
}

/// Completion candidates at `position` in `text`.
pub fn complete<'c, T: SourceText + ?Sized>(
    text: &T,
    position: Position,
    catalog: &'c Catalog,
) -> Vec<&'c CatalogEntry> {
    let context = CursorContext::at(text, position);
    let entries = matching_entries(catalog, &context);
    debug!(
        "Completion at {}:{} ({:?}, {} dots): {} entries",
        position.line,
        position.column,
        context.prior_dotted_word,
        context.number_of_dots(),
        entries.len()
    );
    entries
}
