//! The snippet store and its synchronization with the JSON file on disk.

use crate::core::export;
use crate::{Language, Result, Search, SnipshelfError, Snippet, SnippetMap, Storage};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// An open snippet collection backed by a JSON file.
///
/// `Store` is the primary interface for all snippet mutations. Every mutating
/// call writes the whole collection back to disk before it returns; the
/// in-memory map is only changed once that write has succeeded.
///
/// A single instance is owned by the desktop application's state.
#[derive(Debug)]
pub struct Store {
    storage: Storage,
    snippets: SnippetMap,
}

impl Store {
    /// Opens the store at `path`.
    ///
    /// A missing file gives an empty store. So does a file that cannot be read
    /// or parsed; that case is logged at `warn`, and an unparsable file is
    /// first moved to `<path>.corrupt`.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let storage = Storage::new(path);
        let snippets = storage.read();
        log::info!(
            "loaded {} snippets from {}",
            snippets.len(),
            storage.path().display()
        );
        Self { storage, snippets }
    }

    pub fn path(&self) -> &Path {
        self.storage.path()
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.snippets.contains_key(name)
    }

    /// All snippet names, alphabetically.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.snippets.keys().map(String::as_str)
    }

    /// All snippets, alphabetically by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Snippet)> + '_ {
        self.snippets.iter().map(|(name, snippet)| (name.as_str(), snippet))
    }

    /// Fetches a snippet by name.
    ///
    /// # Errors
    ///
    /// Returns [`SnipshelfError::NotFound`] if there is no snippet called `name`.
    pub fn get(&self, name: &str) -> Result<&Snippet> {
        self.snippets
            .get(name)
            .ok_or_else(|| SnipshelfError::NotFound(name.to_string()))
    }

    /// Adds an empty snippet called `name` tagged with `language`.
    ///
    /// # Errors
    ///
    /// Returns [`SnipshelfError::EmptyName`] for an empty name,
    /// [`SnipshelfError::DuplicateName`] if the name is taken, or
    /// [`SnipshelfError::Persistence`] if the store file cannot be written.
    /// The store is unchanged on error.
    pub fn add(&mut self, name: &str, language: Language) -> Result<()> {
        if name.is_empty() {
            return Err(SnipshelfError::EmptyName);
        }
        if self.contains(name) {
            return Err(SnipshelfError::DuplicateName(name.to_string()));
        }
        self.commit(|snippets| {
            snippets.insert(name.to_string(), Snippet::empty(language));
        })?;
        log::debug!("added snippet '{name}'");
        Ok(())
    }

    /// Overwrites the language and code of an existing snippet.
    ///
    /// # Errors
    ///
    /// Returns [`SnipshelfError::NotFound`] if there is no snippet called `name`,
    /// or [`SnipshelfError::Persistence`] if the store file cannot be written.
    pub fn update(&mut self, name: &str, language: Language, code: String) -> Result<()> {
        if !self.contains(name) {
            return Err(SnipshelfError::NotFound(name.to_string()));
        }
        self.commit(|snippets| {
            snippets.insert(name.to_string(), Snippet { language, code });
        })?;
        log::debug!("updated snippet '{name}'");
        Ok(())
    }

    /// Removes a snippet and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`SnipshelfError::NotFound`] if there is no snippet called `name`,
    /// or [`SnipshelfError::Persistence`] if the store file cannot be written.
    pub fn delete(&mut self, name: &str) -> Result<Snippet> {
        let removed = self.get(name)?.clone();
        self.commit(|snippets| {
            snippets.remove(name);
        })?;
        log::debug!("deleted snippet '{name}'");
        Ok(removed)
    }

    /// Names of snippets whose name or code contains `query`, ignoring case.
    ///
    /// The iterator is lazy and yields names alphabetically; an empty query
    /// yields every name. Call again to restart.
    pub fn search(&self, query: &str) -> Search<'_> {
        Search::new(self.snippets.iter(), query)
    }

    /// Merges `incoming` into the store. Incoming snippets replace existing
    /// ones of the same name. The file is written once, after the merge.
    ///
    /// Returns the number of snippets merged.
    ///
    /// # Errors
    ///
    /// Returns [`SnipshelfError::Persistence`] if the store file cannot be
    /// written, in which case nothing is merged.
    pub fn import_merge(&mut self, incoming: SnippetMap) -> Result<usize> {
        let count = incoming.len();
        self.commit(|snippets| snippets.extend(incoming))?;
        log::info!("merged {count} imported snippets");
        Ok(count)
    }

    /// Reads an import file at `path` and merges it.
    ///
    /// Returns the merged names, alphabetically.
    ///
    /// # Errors
    ///
    /// Returns [`SnipshelfError::Io`] if the file cannot be read,
    /// [`SnipshelfError::ImportFormat`] if it is not a JSON object of
    /// `{language, code}` entries, or any error from [`Store::import_merge`].
    pub fn import_file<P: AsRef<Path>>(&mut self, path: P) -> Result<Vec<String>> {
        let text = fs::read_to_string(path.as_ref())?;
        let incoming = export::parse_import(&text)?;
        let names = incoming.keys().cloned().collect();
        self.import_merge(incoming)?;
        Ok(names)
    }

    /// Writes the raw code of snippet `name` to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`SnipshelfError::NotFound`] for an unknown name or
    /// [`SnipshelfError::Io`] if writing fails.
    pub fn export_one<W: Write>(&self, name: &str, writer: W) -> Result<()> {
        let snippet = self.get(name)?;
        export::write_code(writer, snippet)
    }

    /// Writes the raw code of snippet `name` to a new file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SnipshelfError::NotFound`] for an unknown name, or
    /// [`SnipshelfError::Persistence`] if the file cannot be created or written.
    pub fn export_one_to_path<P: AsRef<Path>>(&self, name: &str, path: P) -> Result<()> {
        let path = path.as_ref();
        let snippet = self.get(name)?;
        let file = File::create(path).map_err(|e| SnipshelfError::persistence(path, e))?;
        export::write_code(BufWriter::new(file), snippet).map_err(|e| into_persistence(e, path))?;
        log::info!("exported snippet '{name}' to {}", path.display());
        Ok(())
    }

    /// Writes the whole store to `writer` as pretty-printed JSON, then
    /// persists the store itself.
    ///
    /// # Errors
    ///
    /// Returns [`SnipshelfError::Io`] or [`SnipshelfError::Json`] if writing
    /// fails, or [`SnipshelfError::Persistence`] if the store file cannot be
    /// written.
    pub fn export_all<W: Write>(&self, writer: W) -> Result<()> {
        export::write_pretty(writer, &self.snippets)?;
        self.storage.write(&self.snippets)
    }

    /// [`Store::export_all`] into a new file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SnipshelfError::Persistence`] if either file cannot be written.
    pub fn export_all_to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| SnipshelfError::persistence(path, e))?;
        self.export_all(BufWriter::new(file))
            .map_err(|e| into_persistence(e, path))?;
        log::info!("exported {} snippets to {}", self.len(), path.display());
        Ok(())
    }

    /// Applies `change` to a copy of the map, writes the copy, and only then
    /// swaps it in.
    fn commit<F>(&mut self, change: F) -> Result<()>
    where
        F: FnOnce(&mut SnippetMap),
    {
        let mut next = self.snippets.clone();
        change(&mut next);
        self.storage.write(&next)?;
        self.snippets = next;
        Ok(())
    }
}

fn into_persistence(err: SnipshelfError, path: &Path) -> SnipshelfError {
    match err {
        SnipshelfError::Io(source) => SnipshelfError::persistence(path, source),
        other => other,
    }
}
