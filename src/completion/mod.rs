//! Dotted-path completion against the built-in catalog.
//!
//! This module provides:
//! - The catalog of built-in names and its lazily built singleton
//! - Cursor context extraction (current word, prior dotted word, dot before cursor)
//! - Depth- and prefix-exact filtering of catalog entries
//! - Label, item kind and insertion template for each entry

mod builtins;
pub mod catalog;
pub mod context;
pub mod matcher;
pub mod presentation;

pub use catalog::{Catalog, CatalogEntry, Depth, EntryKind};
pub use context::CursorContext;
pub use matcher::{complete, matching_entries};
pub use presentation::{InsertText, ItemKind};
