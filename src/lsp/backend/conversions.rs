//! Conversions between analysis results and LSP types.

use tower_lsp::lsp_types::{
    CompletionItem, CompletionItemKind, DocumentSymbol, InsertTextFormat, LocationLink,
    Position as LspPosition, Range, SymbolKind as LspSymbolKind, Url,
};

use crate::analysis::{BlockVariant, DefinitionLink, SymbolKind, SymbolRecord};
use crate::completion::{CatalogEntry, InsertText, ItemKind};
use crate::text::{Position, Span};

pub(super) fn from_lsp_position(position: LspPosition) -> Position {
    Position::new(position.line as usize, position.character as usize)
}

pub(super) fn to_lsp_position(position: Position) -> LspPosition {
    LspPosition {
        line: position.line as u32,
        character: position.column as u32,
    }
}

pub(super) fn to_lsp_range(span: Span) -> Range {
    Range {
        start: to_lsp_position(span.start),
        end: to_lsp_position(span.end),
    }
}

pub(super) fn symbol_kind(kind: SymbolKind) -> LspSymbolKind {
    match kind {
        SymbolKind::NamedBlock { variant: BlockVariant::Block } => LspSymbolKind::OBJECT,
        SymbolKind::NamedBlock { variant: BlockVariant::Class } => LspSymbolKind::CLASS,
        SymbolKind::Variable | SymbolKind::Unknown => LspSymbolKind::VARIABLE,
        SymbolKind::Function => LspSymbolKind::FUNCTION,
    }
}

pub(super) fn document_symbol(symbol: &SymbolRecord) -> DocumentSymbol {
    DocumentSymbol {
        name: symbol.name.clone(),
        detail: None,
        kind: symbol_kind(symbol.kind),
        tags: None,
        range: to_lsp_range(symbol.definition_range),
        selection_range: to_lsp_range(symbol.name_range),
        children: None,
        #[allow(deprecated)]
        deprecated: None,
    }
}

pub(super) fn location_link(uri: &Url, link: &DefinitionLink) -> LocationLink {
    LocationLink {
        origin_selection_range: Some(to_lsp_range(link.origin)),
        target_uri: uri.clone(),
        target_range: to_lsp_range(link.target_range()),
        target_selection_range: to_lsp_range(link.target_selection_range()),
    }
}

fn completion_item_kind(kind: ItemKind) -> CompletionItemKind {
    match kind {
        ItemKind::Constant => CompletionItemKind::CONSTANT,
        ItemKind::Function => CompletionItemKind::FUNCTION,
        ItemKind::Class => CompletionItemKind::CLASS,
        ItemKind::Property => CompletionItemKind::PROPERTY,
        ItemKind::Module => CompletionItemKind::MODULE,
        ItemKind::Keyword => CompletionItemKind::KEYWORD,
    }
}

pub(super) fn completion_item(entry: &CatalogEntry) -> CompletionItem {
    let (insert_text, format) = match entry.insert_text() {
        InsertText::Plain(text) => (text, InsertTextFormat::PLAIN_TEXT),
        InsertText::Snippet(text) => (text, InsertTextFormat::SNIPPET),
    };

    CompletionItem {
        label: entry.display_name().to_string(),
        kind: Some(completion_item_kind(entry.item_kind())),
        detail: entry.description.clone(),
        insert_text: Some(insert_text),
        insert_text_format: Some(format),
        ..Default::default()
    }
}
