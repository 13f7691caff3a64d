//! The fixed set of languages a snippet can be tagged with.
//!
//! Languages persist as their display names (`"C++"`, `"Shell"`, ...). Names
//! outside the set, which can arrive through hand-edited store files or
//! imports, are kept verbatim in [`Language::Other`] so they round-trip
//! unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Language tag attached to a snippet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    #[default]
    Python,
    JavaScript,
    Html,
    Css,
    Java,
    Cpp,
    CSharp,
    Ruby,
    Php,
    Swift,
    Go,
    Rust,
    TypeScript,
    Sql,
    Shell,
    Markdown,
    Json,
    Yaml,
    /// A name outside the recognised set.
    Other(String),
}

impl Language {
    /// Every recognised language, in picker order.
    pub const ALL: [Language; 18] = [
        Language::Python,
        Language::JavaScript,
        Language::Html,
        Language::Css,
        Language::Java,
        Language::Cpp,
        Language::CSharp,
        Language::Ruby,
        Language::Php,
        Language::Swift,
        Language::Go,
        Language::Rust,
        Language::TypeScript,
        Language::Sql,
        Language::Shell,
        Language::Markdown,
        Language::Json,
        Language::Yaml,
    ];

    /// The persisted display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Python => "Python",
            Self::JavaScript => "JavaScript",
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::Java => "Java",
            Self::Cpp => "C++",
            Self::CSharp => "C#",
            Self::Ruby => "Ruby",
            Self::Php => "PHP",
            Self::Swift => "Swift",
            Self::Go => "Go",
            Self::Rust => "Rust",
            Self::TypeScript => "TypeScript",
            Self::Sql => "SQL",
            Self::Shell => "Shell",
            Self::Markdown => "Markdown",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
            Self::Other(name) => name,
        }
    }

    /// Resolves a display name. Matching is exact, so `"python"` becomes
    /// `Other("python")` and persists back as written.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .iter()
            .find(|lang| lang.name() == name)
            .cloned()
            .unwrap_or_else(|| Self::Other(name.to_string()))
    }

    pub fn is_recognised(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for Language {
    fn from(name: String) -> Self {
        match Self::from_name(&name) {
            Self::Other(_) => Self::Other(name),
            known => known,
        }
    }
}

impl From<&str> for Language {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        match lang {
            Language::Other(name) => name,
            known => known.name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_recognised_name_resolves_to_itself() {
        for lang in Language::ALL.iter() {
            assert_eq!(&Language::from_name(lang.name()), lang);
            assert!(lang.is_recognised());
        }
    }

    #[test]
    fn test_symbolic_names() {
        assert_eq!(Language::from_name("C++"), Language::Cpp);
        assert_eq!(Language::from_name("C#"), Language::CSharp);
        assert_eq!(Language::Cpp.to_string(), "C++");
    }

    #[test]
    fn test_unknown_name_is_preserved() {
        let lang = Language::from_name("Haskell");
        assert_eq!(lang, Language::Other("Haskell".to_string()));
        assert!(!lang.is_recognised());
        assert_eq!(String::from(lang), "Haskell");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&Language::CSharp).unwrap();
        assert_eq!(json, r#""C#""#);

        let parsed: Language = serde_json::from_str(r#""Elixir""#).unwrap();
        assert_eq!(parsed, Language::Other("Elixir".to_string()));
    }

    #[test]
    fn test_default_is_python() {
        assert_eq!(Language::default(), Language::Python);
    }
}
