//! On-disk representation of the store: one JSON object keyed by snippet name.

use crate::{Result, SnipshelfError, SnippetMap};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// File name used when no other store path is configured.
pub const DEFAULT_STORE_FILE: &str = "snippets.json";

/// Reads and writes the snippet map at a fixed path.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted map. A missing, unreadable or malformed file yields
    /// an empty map; only the last two are logged.
    ///
    /// A malformed file is moved aside to `<path>.corrupt` first, so the next
    /// write cannot destroy it.
    pub fn read(&self) -> SnippetMap {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no store at {}, starting empty", self.path.display());
                return SnippetMap::new();
            }
            Err(e) => {
                log::warn!("could not read store {}: {e}", self.path.display());
                return SnippetMap::new();
            }
        };
        match serde_json::from_str(&content) {
            Ok(map) => map,
            Err(e) => {
                let corrupt_path = self.corrupt_path();
                match fs::rename(&self.path, &corrupt_path) {
                    Ok(()) => log::warn!(
                        "store {} is not valid snippet JSON ({e}); moved it to {}",
                        self.path.display(),
                        corrupt_path.display()
                    ),
                    Err(rename_err) => log::warn!(
                        "store {} is not valid snippet JSON ({e}) and could not be moved aside: {rename_err}",
                        self.path.display()
                    ),
                }
                SnippetMap::new()
            }
        }
    }

    /// Where [`Storage::read`] moves a malformed store file.
    pub fn corrupt_path(&self) -> PathBuf {
        self.sibling(".corrupt")
    }

    /// Replaces the file with `snippets`.
    ///
    /// The JSON is written to `<path>.tmp`, synced, then renamed over the store,
    /// so a crash mid-write leaves the previous contents in place.
    ///
    /// # Errors
    ///
    /// Returns [`SnipshelfError::Persistence`] if any filesystem step fails, or
    /// [`SnipshelfError::Json`] if the map cannot be serialized.
    pub fn write(&self, snippets: &SnippetMap) -> Result<()> {
        let data = serde_json::to_vec(snippets)?;
        let tmp_path = self.tmp_path();
        if let Err(e) = self.replace_with(&tmp_path, &data) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }
        log::debug!("wrote {} snippets to {}", snippets.len(), self.path.display());
        Ok(())
    }

    fn replace_with(&self, tmp_path: &Path, data: &[u8]) -> Result<()> {
        let mut file =
            File::create(tmp_path).map_err(|e| SnipshelfError::persistence(tmp_path, e))?;
        file.write_all(data)
            .map_err(|e| SnipshelfError::persistence(tmp_path, e))?;
        file.sync_all()
            .map_err(|e| SnipshelfError::persistence(tmp_path, e))?;
        drop(file);
        fs::rename(tmp_path, &self.path).map_err(|e| SnipshelfError::persistence(&self.path, e))
    }

    fn tmp_path(&self) -> PathBuf {
        self.sibling(".tmp")
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(suffix);
        PathBuf::from(name)
    }
}
