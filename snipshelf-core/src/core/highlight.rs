//! Vocabulary shared with the syntax highlighter.
//!
//! Highlighting itself happens in the desktop shell. The core only decides
//! which grammar a language asks for and which colour schemes are offered.
//! Grammars are named by file-extension style tokens; a highlighter with no
//! grammar for a token renders the code as plain text.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Language;

/// Token that always selects the plain-text grammar.
pub const PLAIN_TEXT_TOKEN: &str = "txt";

/// Grammar token for `language`.
pub fn syntax_token(language: &Language) -> &'static str {
    match language {
        Language::Python => "py",
        Language::JavaScript => "js",
        Language::Html => "html",
        Language::Css => "css",
        Language::Java => "java",
        Language::Cpp => "cpp",
        Language::CSharp => "cs",
        Language::Ruby => "rb",
        Language::Php => "php",
        Language::Swift => "swift",
        Language::Go => "go",
        Language::Rust => "rs",
        Language::TypeScript => "ts",
        Language::Sql => "sql",
        Language::Shell => "sh",
        Language::Markdown => "md",
        Language::Json => "json",
        Language::Yaml => "yaml",
        Language::Other(_) => PLAIN_TEXT_TOKEN,
    }
}

/// Colour schemes the editor can highlight with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HighlightTheme {
    #[default]
    SolarizedDark,
    Base16Mocha,
    Base16Ocean,
    Base16Eighties,
    InspiredGitHub,
}

impl HighlightTheme {
    pub const ALL: [HighlightTheme; 5] = [
        HighlightTheme::SolarizedDark,
        HighlightTheme::Base16Mocha,
        HighlightTheme::Base16Ocean,
        HighlightTheme::Base16Eighties,
        HighlightTheme::InspiredGitHub,
    ];

    /// Whether the scheme is meant for a dark background.
    pub fn is_dark(self) -> bool {
        !matches!(self, Self::InspiredGitHub)
    }
}

impl fmt::Display for HighlightTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SolarizedDark => "Solarized Dark",
            Self::Base16Mocha => "Mocha",
            Self::Base16Ocean => "Ocean",
            Self::Base16Eighties => "Eighties",
            Self::InspiredGitHub => "Inspired GitHub",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_recognised_language_has_its_own_token() {
        let mut tokens: Vec<_> = Language::ALL.iter().map(syntax_token).collect();
        assert!(tokens.iter().all(|t| *t != PLAIN_TEXT_TOKEN));
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), Language::ALL.len());
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain_text() {
        let lang = Language::Other("Brainfuck".to_string());
        assert_eq!(syntax_token(&lang), PLAIN_TEXT_TOKEN);
    }

    #[test]
    fn test_theme_serialization() {
        let json = serde_json::to_string(&HighlightTheme::Base16Ocean).unwrap();
        assert_eq!(json, r#""base16-ocean""#);
        assert!(!HighlightTheme::InspiredGitHub.is_dark());
    }
}
