//! Snippet import and export formats.
//!
//! Exporting one snippet writes its raw code. Exporting everything writes the
//! store's JSON shape, pretty-printed, which is also the shape accepted on import.

use serde_json::Value;
use std::io::Write;

use crate::{Result, SnipshelfError, Snippet, SnippetMap};

/// Suggested file name for a full export.
pub const ALL_SNIPPETS_FILE_NAME: &str = "all_snippets.json";

/// Suggested file name when exporting a single snippet: `<name>.<language>`,
/// language lower-cased.
pub fn default_export_name(name: &str, snippet: &Snippet) -> String {
    format!("{name}.{}", snippet.language.name().to_lowercase())
}

/// Parses the contents of an import file.
///
/// # Errors
///
/// Returns [`SnipshelfError::ImportFormat`] when `text` is not JSON, is not an
/// object, has an empty key, or has an entry that is not a `{language, code}`
/// object.
pub fn parse_import(text: &str) -> Result<SnippetMap> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| SnipshelfError::ImportFormat(format!("not valid JSON: {e}")))?;
    let Value::Object(entries) = value else {
        return Err(SnipshelfError::ImportFormat(
            "expected a JSON object keyed by snippet name".to_string(),
        ));
    };

    let mut snippets = SnippetMap::new();
    for (name, entry) in entries {
        if name.is_empty() {
            return Err(SnipshelfError::ImportFormat(
                "snippet names must not be empty".to_string(),
            ));
        }
        let snippet: Snippet = serde_json::from_value(entry)
            .map_err(|e| SnipshelfError::ImportFormat(format!("snippet '{name}': {e}")))?;
        snippets.insert(name, snippet);
    }
    Ok(snippets)
}

pub(crate) fn write_code<W: Write>(mut writer: W, snippet: &Snippet) -> Result<()> {
    writer.write_all(snippet.code.as_bytes())?;
    writer.flush()?;
    Ok(())
}

pub(crate) fn write_pretty<W: Write>(mut writer: W, snippets: &SnippetMap) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, snippets)?;
    writer.flush()?;
    Ok(())
}
