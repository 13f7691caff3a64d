//! Maps user intents onto store calls.
//!
//! The iced update loop turns widget messages into [`Action`]s (after any
//! dialogs have collected paths or confirmations) and hands them to [`apply`].
//! This is the only place the shell mutates the [`Store`].

use iced::widget::text_editor;
use snipshelf_core::{Language, Result, Store};
use std::path::PathBuf;

use crate::notice::Notice;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Add { name: String, language: Language },
    Save { name: String, language: Language, code: String },
    Delete { name: String },
    Import { path: PathBuf },
    ExportOne { name: String, path: PathBuf },
    ExportAll { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Added(String),
    Saved(String),
    Deleted(String),
    Imported { names: Vec<String>, path: PathBuf },
    ExportedOne { name: String, path: PathBuf },
    ExportedAll { path: PathBuf },
}

impl Outcome {
    /// Whether the stored contents of snippet `name` may have been replaced,
    /// so an editor showing it must reload.
    pub fn affects(&self, name: &str) -> bool {
        match self {
            Self::Imported { names, .. } => names.iter().any(|n| n == name),
            _ => false,
        }
    }

    /// Confirmation shown after the action, if the action warrants one.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::Added(_) | Self::Deleted(_) => None,
            Self::Saved(_) => Some(Notice::info("Success", "Snippet saved successfully.")),
            Self::Imported { path, .. } => Some(Notice::info(
                "Success",
                format!("Snippets imported from {}", path.display()),
            )),
            Self::ExportedOne { path, .. } => Some(Notice::info(
                "Success",
                format!("Snippet exported to {}", path.display()),
            )),
            Self::ExportedAll { path } => Some(Notice::info(
                "Success",
                format!("All snippets exported to {}", path.display()),
            )),
        }
    }
}

/// Performs `action` against `store`.
///
/// # Errors
///
/// Propagates whatever the underlying [`Store`] call returns.
pub fn apply(store: &mut Store, action: Action) -> Result<Outcome> {
    log::debug!("dispatching {action:?}");
    match action {
        Action::Add { name, language } => {
            store.add(&name, language)?;
            Ok(Outcome::Added(name))
        }
        Action::Save {
            name,
            language,
            code,
        } => {
            store.update(&name, language, code)?;
            Ok(Outcome::Saved(name))
        }
        Action::Delete { name } => {
            store.delete(&name)?;
            Ok(Outcome::Deleted(name))
        }
        Action::Import { path } => {
            let names = store.import_file(&path)?;
            Ok(Outcome::Imported { names, path })
        }
        Action::ExportOne { name, path } => {
            store.export_one_to_path(&name, &path)?;
            Ok(Outcome::ExportedOne { name, path })
        }
        Action::ExportAll { path } => {
            store.export_all_to_path(&path)?;
            Ok(Outcome::ExportedAll { path })
        }
    }
}

/// The editor's text exactly as typed.
///
/// `Content::text` appends a newline the buffer does not contain; joining the
/// lines does not, and `with_text(s)` followed by this returns `s`.
pub fn editor_code(editor: &text_editor::Content) -> String {
    let mut code = String::new();
    for (i, line) in editor.lines().enumerate() {
        if i > 0 {
            code.push('\n');
        }
        code.push_str(&line);
    }
    code
}

/// Names to list for the current search box contents.
pub fn visible_names(store: &Store, query: &str) -> Vec<String> {
    store.search(query).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use snipshelf_core::{SnipshelfError, DEFAULT_STORE_FILE};
    use std::fs;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> Store {
        Store::load(dir.path().join(DEFAULT_STORE_FILE))
    }

    #[test]
    fn add_save_delete_flow() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        let outcome = apply(
            &mut store,
            Action::Add {
                name: "hello".to_string(),
                language: Language::Python,
            },
        )
        .unwrap();
        assert_eq!(outcome, Outcome::Added("hello".to_string()));
        assert!(outcome.notice().is_none());

        let outcome = apply(
            &mut store,
            Action::Save {
                name: "hello".to_string(),
                language: Language::Python,
                code: "print(1)".to_string(),
            },
        )
        .unwrap();
        assert_eq!(
            outcome.notice().unwrap().message,
            "Snippet saved successfully."
        );
        assert_eq!(store.get("hello").unwrap().code, "print(1)");

        apply(
            &mut store,
            Action::Delete {
                name: "hello".to_string(),
            },
        )
        .unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn duplicate_add_surfaces_store_error() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        let add = Action::Add {
            name: "x".to_string(),
            language: Language::Go,
        };
        apply(&mut store, add.clone()).unwrap();
        let err = apply(&mut store, add).unwrap_err();
        assert!(matches!(err, SnipshelfError::DuplicateName(_)));
    }

    #[test]
    fn export_all_then_import_elsewhere() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        apply(
            &mut store,
            Action::Add {
                name: "a".to_string(),
                language: Language::Css,
            },
        )
        .unwrap();

        let path = dir.path().join("all_snippets.json");
        let outcome = apply(&mut store, Action::ExportAll { path: path.clone() }).unwrap();
        assert!(outcome.notice().unwrap().message.contains("all_snippets.json"));

        let other = TempDir::new().unwrap();
        let mut fresh = store_in(&other);
        let outcome = apply(&mut fresh, Action::Import { path }).unwrap();
        assert!(matches!(outcome, Outcome::Imported { ref names, .. } if names == &["a"]));
        assert_eq!(fresh.get("a").unwrap().language, Language::Css);
    }

    #[test]
    fn import_marks_overwritten_snippet_for_reload() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.add("open", Language::Python).unwrap();
        store.add("other", Language::Python).unwrap();

        let path = dir.path().join("import.json");
        fs::write(&path, r#"{"open": {"language": "Go", "code": "package main"}}"#).unwrap();
        let outcome = apply(&mut store, Action::Import { path }).unwrap();

        assert!(outcome.affects("open"));
        assert!(!outcome.affects("other"));
        assert_eq!(store.get("open").unwrap().code, "package main");
        assert!(!Outcome::Saved("open".to_string()).affects("open"));
    }

    #[test]
    fn editor_code_round_trips_exact_text() {
        for code in ["", "a", "a\n", "fn main() {\n    println!();\n}", "\n\n"] {
            let editor = text_editor::Content::with_text(code);
            assert_eq!(editor_code(&editor), code);
        }
    }

    #[test]
    fn export_one_writes_code_file() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.add("q", Language::Sql).unwrap();
        store
            .update("q", Language::Sql, "SELECT 1;".to_string())
            .unwrap();

        let path = dir.path().join("q.sql");
        apply(
            &mut store,
            Action::ExportOne {
                name: "q".to_string(),
                path: path.clone(),
            },
        )
        .unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "SELECT 1;");
    }

    #[test]
    fn visible_names_follow_search() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.add("beta", Language::Go).unwrap();
        store.add("Alpha", Language::Go).unwrap();

        assert_eq!(visible_names(&store, ""), vec!["Alpha", "beta"]);
        assert_eq!(visible_names(&store, "ALP"), vec!["Alpha"]);
    }
}
