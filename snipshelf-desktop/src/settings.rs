//! Application settings persistence for Snipshelf.
//!
//! Stores user preferences (store location, editor theme, last dialog
//! directory) in a JSON file at an OS-appropriate location.

use serde::{Deserialize, Serialize};
use snipshelf_core::{HighlightTheme, Language, DEFAULT_STORE_FILE};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides [`AppSettings::store_path`] for one run.
pub const STORE_ENV_VAR: &str = "SNIPSHELF_STORE";

/// Persisted application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    /// Snippet store file. Relative paths resolve against the working directory.
    pub store_path: String,
    /// Language preselected in the picker at startup.
    pub default_language: Language,
    pub highlight_theme: HighlightTheme,
    pub dark_mode: bool,
    /// Directory the last import or export dialog ended in.
    pub last_directory: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            store_path: DEFAULT_STORE_FILE.to_string(),
            default_language: Language::default(),
            highlight_theme: HighlightTheme::default(),
            dark_mode: true,
            last_directory: None,
        }
    }
}

impl AppSettings {
    /// The store path to open, honouring `env_override` when it is set and non-empty.
    pub fn resolve_store_path(&self, env_override: Option<String>) -> PathBuf {
        match env_override {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => PathBuf::from(&self.store_path),
        }
    }

    /// Remembers the directory containing `path` for the next dialog.
    pub fn remember_directory(&mut self, path: &Path) {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.last_directory = Some(parent.to_string_lossy().to_string());
        }
    }
}

/// Returns the path to the settings JSON file.
///
/// - macOS / Linux: `~/.config/snipshelf/settings.json`
/// - Windows: `%APPDATA%/Snipshelf/settings.json`
pub fn settings_file_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("Snipshelf").join("settings.json")
    }
    #[cfg(not(target_os = "windows"))]
    {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config").join("snipshelf").join("settings.json")
    }
}

/// Loads settings from disk; returns defaults if the file is missing or corrupt.
pub fn load_settings() -> AppSettings {
    load_settings_from(&settings_file_path())
}

pub fn load_settings_from(path: &Path) -> AppSettings {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("ignoring corrupt settings file {}: {e}", path.display());
            AppSettings::default()
        }),
        Err(_) => AppSettings::default(),
    }
}

/// Saves settings to disk, creating parent directories as needed.
pub fn save_settings(settings: &AppSettings) -> Result<(), String> {
    save_settings_to(&settings_file_path(), settings)
}

pub fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create settings directory: {e}"))?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| format!("Failed to serialize settings: {e}"))?;
    fs::write(path, json).map_err(|e| format!("Failed to write settings: {e}"))?;
    Ok(())
}
