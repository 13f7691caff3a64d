//! Internal domain modules for the Snipshelf core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod error;
pub mod export;
pub mod highlight;
pub mod language;
pub mod search;
pub mod snippet;
pub mod storage;
pub mod store;

#[doc(inline)]
pub use error::{Result, SnipshelfError};
#[doc(inline)]
pub use highlight::{syntax_token, HighlightTheme};
#[doc(inline)]
pub use language::Language;
#[doc(inline)]
pub use search::Search;
#[doc(inline)]
pub use snippet::{Snippet, SnippetMap};
#[doc(inline)]
pub use storage::Storage;
#[doc(inline)]
pub use store::Store;
