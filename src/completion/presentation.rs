//! How catalog entries are shown and inserted.

use super::catalog::{CatalogEntry, Depth, EntryKind};

/// Text inserted when a completion is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertText {
    /// Literal text.
    Plain(String),
    /// Snippet with a `${1}` placeholder.
    Snippet(String),
}

/// Visual category shown next to a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Constant,
    Function,
    Class,
    Property,
    Module,
    Keyword,
}

/// Presentation row for one entry kind.
struct Presentation {
    item_kind: ItemKind,
    template: Template,
}

enum Template {
    Label,
    CallWithPlaceholder,
    EmptyCall,
    RecordWithPlaceholder,
    TrailingSpace,
}

const fn presentation(kind: EntryKind) -> Presentation {
    let (item_kind, template) = match kind {
        EntryKind::Constant => (ItemKind::Constant, Template::Label),
        EntryKind::Function => (ItemKind::Function, Template::CallWithPlaceholder),
        EntryKind::EmptyCallFunction => (ItemKind::Function, Template::EmptyCall),
        EntryKind::Object => (ItemKind::Class, Template::RecordWithPlaceholder),
        EntryKind::Property => (ItemKind::Property, Template::Label),
        EntryKind::Module => (ItemKind::Module, Template::Label),
        EntryKind::Keyword => (ItemKind::Keyword, Template::TrailingSpace),
        EntryKind::KeywordNoArgs => (ItemKind::Keyword, Template::EmptyCall),
    };
    Presentation { item_kind, template }
}

impl CatalogEntry {
    /// Path shown in the completion list: the segments left after eliding
    /// `depth` leading ones. Top-level and any-depth entries show their full path.
    pub fn display_name(&self) -> &str {
        let Depth::Level(depth) = self.depth else {
            return &self.dotted_path;
        };
        if depth == 0 {
            return &self.dotted_path;
        }
        match self.dotted_path.match_indices('.').nth(depth - 1) {
            Some((index, _)) => &self.dotted_path[index + 1..],
            None => &self.dotted_path,
        }
    }

    pub fn item_kind(&self) -> ItemKind {
        presentation(self.kind).item_kind
    }

    pub fn insert_text(&self) -> InsertText {
        let label = self.display_name();
        match presentation(self.kind).template {
            Template::Label => InsertText::Plain(label.to_string()),
            Template::CallWithPlaceholder => InsertText::Snippet(format!("{label}( ${{1}} )")),
            Template::EmptyCall => InsertText::Plain(format!("{label}()")),
            Template::RecordWithPlaceholder => InsertText::Snippet(format!("{label}{{ ${{1}} }}")),
            Template::TrailingSpace => InsertText::Plain(format!("{label} ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_elides_depth() {
        let union = CatalogEntry::new("Math.Interval1D.Union", Depth::Level(2), EntryKind::Function);
        assert_eq!(union.display_name(), "Union");

        let hinge = CatalogEntry::new("Fcs.Beam.Hinge.Dof.Stiff", Depth::Level(3), EntryKind::Property);
        assert_eq!(hinge.display_name(), "Dof.Stiff");

        let select = CatalogEntry::new("Select", Depth::Any, EntryKind::Function);
        assert_eq!(select.display_name(), "Select");

        let top = CatalogEntry::new("Math", Depth::Level(0), EntryKind::Module);
        assert_eq!(top.display_name(), "Math");
    }

    #[test]
    fn test_insert_templates() {
        let cases = [
            (EntryKind::Constant, InsertText::Plain("PI".to_string()), ItemKind::Constant),
            (EntryKind::Function, InsertText::Snippet("PI( ${1} )".to_string()), ItemKind::Function),
            (EntryKind::EmptyCallFunction, InsertText::Plain("PI()".to_string()), ItemKind::Function),
            (EntryKind::Object, InsertText::Snippet("PI{ ${1} }".to_string()), ItemKind::Class),
            (EntryKind::Property, InsertText::Plain("PI".to_string()), ItemKind::Property),
            (EntryKind::Module, InsertText::Plain("PI".to_string()), ItemKind::Module),
            (EntryKind::Keyword, InsertText::Plain("PI ".to_string()), ItemKind::Keyword),
            (EntryKind::KeywordNoArgs, InsertText::Plain("PI()".to_string()), ItemKind::Keyword),
        ];
        for (kind, insert, item_kind) in cases {
            let entry = CatalogEntry::new("Math.PI", Depth::Level(1), kind);
            assert_eq!(entry.insert_text(), insert, "{kind:?}");
            assert_eq!(entry.item_kind(), item_kind, "{kind:?}");
        }
    }
}
