//! Error types for the Snipshelf core library.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur within the Snipshelf core library.
#[derive(Debug, Error)]
pub enum SnipshelfError {
    /// A snippet with this name is already in the store.
    #[error("Duplicate snippet name: {0}")]
    DuplicateName(String),

    /// A snippet name was empty.
    #[error("Snippet name must not be empty")]
    EmptyName,

    /// A snippet name was requested that does not exist in the store.
    #[error("Snippet not found: {0}")]
    NotFound(String),

    /// Writing the store file or an export destination failed.
    #[error("Failed to write {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An import file is not a JSON object of `{language, code}` entries.
    #[error("Invalid import format: {0}")]
    ImportFormat(String),

    /// An I/O operation on an import file or caller-supplied writer failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The store could not be serialized to JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias that pins the error type to [`SnipshelfError`].
pub type Result<T> = std::result::Result<T, SnipshelfError>;

impl SnipshelfError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::DuplicateName(_) => "A snippet with this name already exists.".to_string(),
            Self::EmptyName => "Please enter a snippet name.".to_string(),
            Self::NotFound(name) => format!("Snippet '{name}' no longer exists."),
            Self::Persistence { path, source } => {
                format!("Failed to save {}: {source}", path.display())
            }
            Self::ImportFormat(msg) => format!("Failed to import snippets: {msg}"),
            Self::Io(e) => format!("File error: {e}"),
            Self::Json(e) => format!("Data format error: {e}"),
        }
    }

    pub(crate) fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Persistence {
            path: path.into(),
            source,
        }
    }
}
