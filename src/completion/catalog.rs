//! Catalog of completable names.
//!
//! The built-in catalog is assembled from a static table the first time it is
//! requested and shared, unchanged, for the rest of the process.

use once_cell::sync::Lazy;
use tracing::debug;

use super::builtins::{ANY, BUILTINS};

/// Kind of a catalog entry, used to pick its presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Constant,
    Function,
    /// Function called without arguments.
    EmptyCallFunction,
    /// Constructor taking a record body.
    Object,
    Property,
    Module,
    /// Statement keyword followed by arguments.
    Keyword,
    /// Statement keyword without arguments.
    KeywordNoArgs,
}

/// Nesting level at which an entry is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Depth {
    /// Offered after a dot on any receiver.
    Any,
    /// Offered once this many path segments have been typed.
    Level(usize),
}

impl Depth {
    fn from_raw(raw: i32) -> Self {
        if raw == ANY {
            Depth::Any
        } else {
            Depth::Level(raw.max(0) as usize)
        }
    }
}

/// A completable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub dotted_path: String,
    pub depth: Depth,
    pub kind: EntryKind,
    pub description: Option<String>,
}

impl CatalogEntry {
    pub fn new(dotted_path: impl Into<String>, depth: Depth, kind: EntryKind) -> Self {
        Self {
            dotted_path: dotted_path.into(),
            depth,
            kind,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Immutable, ordered collection of catalog entries.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

static BUILTIN_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    let catalog = Catalog::from_entries(BUILTINS.iter().map(|builtin| CatalogEntry {
        dotted_path: builtin.path.to_string(),
        depth: Depth::from_raw(builtin.depth),
        kind: builtin.kind,
        description: builtin.description.map(str::to_string),
    }));
    debug!("Built-in catalog initialised with {} entries", catalog.len());
    catalog
});

impl Catalog {
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The built-in catalog, built on first use.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN_CATALOG
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_memoized() {
        let first = Catalog::builtin();
        let second = Catalog::builtin();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.len(), BUILTINS.len());
    }

    #[test]
    fn test_builtin_depths_follow_paths() {
        for entry in Catalog::builtin().iter() {
            if let Depth::Level(depth) = entry.depth {
                assert!(
                    entry.dotted_path.matches('.').count() >= depth,
                    "{} is deeper than its path",
                    entry.dotted_path
                );
            }
        }
    }

    #[test]
    fn test_builtin_any_depth_members() {
        let select = Catalog::builtin()
            .iter()
            .find(|entry| entry.dotted_path == "Select")
            .unwrap();
        assert_eq!(select.depth, Depth::Any);
        assert_eq!(select.kind, EntryKind::Function);
        assert_eq!(select.description.as_deref(), Some("Array function"));
    }

    #[test]
    fn test_entries_without_kind_are_constants() {
        let force = Catalog::builtin()
            .iter()
            .find(|entry| entry.dotted_path == "Fcs.EngineeringQuantity.Force")
            .unwrap();
        assert_eq!(force.kind, EntryKind::Constant);
        assert_eq!(force.depth, Depth::Level(2));
    }
}
