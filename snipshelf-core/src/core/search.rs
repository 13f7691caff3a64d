//! Case-insensitive filtering of snippet names.

use std::collections::btree_map;

use crate::Snippet;

/// Lazy iterator over the names of snippets whose name or code contains a query.
///
/// Yields names in alphabetical order. A clone continues from the current
/// position; [`Store::search`](crate::Store::search) starts over.
#[derive(Debug, Clone)]
pub struct Search<'a> {
    entries: btree_map::Iter<'a, String, Snippet>,
    needle: String,
}

impl<'a> Search<'a> {
    pub(crate) fn new(entries: btree_map::Iter<'a, String, Snippet>, query: &str) -> Self {
        Self {
            entries,
            needle: query.to_lowercase(),
        }
    }
}

fn matches(needle: &str, name: &str, snippet: &Snippet) -> bool {
    needle.is_empty()
        || name.to_lowercase().contains(needle)
        || snippet.code.to_lowercase().contains(needle)
}

impl<'a> Iterator for Search<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = &self.needle;
        self.entries
            .find(|(name, snippet)| matches(needle, name, snippet))
            .map(|(name, _)| name.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.entries.size_hint().1)
    }
}

impl std::iter::FusedIterator for Search<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Language, SnippetMap};

    fn map() -> SnippetMap {
        let mut map = SnippetMap::new();
        for (name, code) in [
            ("Quicksort", "def qsort(xs): pass"),
            ("fetch json", "await fetch(url).then(r => r.json())"),
            ("Hello", "print('HELLO world')"),
        ] {
            map.insert(
                name.to_string(),
                crate::Snippet {
                    language: Language::Python,
                    code: code.to_string(),
                },
            );
        }
        map
    }

    #[test]
    fn test_empty_query_yields_everything_sorted() {
        let map = map();
        let names: Vec<_> = Search::new(map.iter(), "").collect();
        assert_eq!(names, vec!["Hello", "Quicksort", "fetch json"]);
    }

    #[test]
    fn test_matches_name_case_insensitively() {
        let map = map();
        let names: Vec<_> = Search::new(map.iter(), "QUICK").collect();
        assert_eq!(names, vec!["Quicksort"]);
    }

    #[test]
    fn test_matches_code_case_insensitively() {
        let map = map();
        let names: Vec<_> = Search::new(map.iter(), "World").collect();
        assert_eq!(names, vec!["Hello"]);
        let names: Vec<_> = Search::new(map.iter(), "JSON").collect();
        assert_eq!(names, vec!["fetch json"]);
    }

    #[test]
    fn test_no_match() {
        let map = map();
        assert_eq!(Search::new(map.iter(), "zzz").count(), 0);
    }

    #[test]
    fn test_clone_forks_iteration() {
        let map = map();
        let mut search = Search::new(map.iter(), "");
        assert_eq!(search.next(), Some("Hello"));
        let fork = search.clone();
        assert_eq!(search.collect::<Vec<_>>(), fork.collect::<Vec<_>>());
    }
}
