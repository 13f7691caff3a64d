//! User-facing notifications raised by the shell.

use snipshelf_core::{SnipshelfError, APP_VERSION};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

/// A message for the user, shown in a native dialog and echoed in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: Level::Warning,
            title: "Warning".to_string(),
            message: message.into(),
        }
    }

    pub fn no_selection() -> Self {
        Self::warning("No snippet selected.")
    }

    pub fn about() -> Self {
        Self::info(
            "About Snipshelf",
            format!(
                "Snipshelf v{APP_VERSION}\n\nA simple tool to manage and organize your code snippets."
            ),
        )
    }
}

/// User mistakes are warnings; anything touching the filesystem is an error.
impl From<&SnipshelfError> for Notice {
    fn from(err: &SnipshelfError) -> Self {
        match err {
            SnipshelfError::DuplicateName(_)
            | SnipshelfError::EmptyName
            | SnipshelfError::NotFound(_) => Self::warning(err.user_message()),
            _ => Self {
                level: Level::Error,
                title: "Error".to_string(),
                message: err.user_message(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_name_is_a_warning() {
        let notice = Notice::from(&SnipshelfError::DuplicateName("a".to_string()));
        assert_eq!(notice.level, Level::Warning);
        assert_eq!(notice.message, "A snippet with this name already exists.");
    }

    #[test]
    fn import_format_is_an_error() {
        let notice = Notice::from(&SnipshelfError::ImportFormat("bad".to_string()));
        assert_eq!(notice.level, Level::Error);
        assert!(notice.message.contains("bad"));
    }

    #[test]
    fn about_mentions_version() {
        assert!(Notice::about().message.contains(APP_VERSION));
    }
}
