use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::Language;

/// A named piece of source code. The name is the map key and is not stored here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snippet {
    pub language: Language,
    pub code: String,
}

impl Snippet {
    /// A freshly added snippet: the given language and no code.
    pub fn empty(language: Language) -> Self {
        Self {
            language,
            code: String::new(),
        }
    }
}

/// Snippets keyed by name, iterated in code-point order of the name.
pub type SnippetMap = BTreeMap<String, Snippet>;
