//! Core library for Snipshelf — a local store of named code snippets.
//!
//! The primary entry point is [`Store`], which owns the in-memory snippet map
//! and keeps it in sync with a single JSON file. All mutations go through
//! `Store` methods and are persisted before they return.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    error::{Result, SnipshelfError},
    export::{default_export_name, parse_import, ALL_SNIPPETS_FILE_NAME},
    highlight::{syntax_token, HighlightTheme, PLAIN_TEXT_TOKEN},
    language::Language,
    search::Search,
    snippet::{Snippet, SnippetMap},
    storage::{Storage, DEFAULT_STORE_FILE},
    store::Store,
};

/// Version string reported by the About notice.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
