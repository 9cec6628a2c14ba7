//! Word list used by the bundled host to answer suggestion requests
//!
//! The component never filters on its own; this is the host side of that
//! contract, ranking words with the skim fuzzy matcher.

use std::fs;
use std::path::Path;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::dropdown::SuggestionItem;
use crate::error::ChipInputError;

const BUILTIN_WORDS: &[&str] = &[
    "ada", "assembly", "bash", "c", "clojure", "cobol", "cpp", "crystal", "csharp", "dart",
    "elixir", "elm", "erlang", "fortran", "fsharp", "go", "groovy", "haskell", "java",
    "javascript", "julia", "kotlin", "lisp", "lua", "nim", "ocaml", "perl", "php", "prolog",
    "python", "r", "racket", "ruby", "rust", "scala", "scheme", "sql", "swift", "typescript",
    "zig",
];

pub struct WordList {
    words: Vec<String>,
    matcher: SkimMatcherV2,
}

impl WordList {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            matcher: SkimMatcherV2::default(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_WORDS.iter().map(|w| w.to_string()).collect())
    }

    /// Load words from a JSON array of `{"label": ...}` objects, or from plain
    /// text with one word per line
    pub fn load(path: &Path) -> Result<Self, ChipInputError> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Self {
        if let Ok(items) = serde_json::from_str::<Vec<SuggestionItem>>(content) {
            return Self::new(items.into_iter().map(|item| item.label).collect());
        }
        Self::new(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words matching `query`, best match first
    pub fn filter(&self, query: &str) -> Vec<SuggestionItem> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(i64, &String)> = self
            .words
            .iter()
            .filter_map(|word| self.matcher.fuzzy_match(word, query).map(|score| (score, word)))
            .collect();
        // Stable sort keeps list order among equal scores
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        scored
            .into_iter()
            .map(|(_, word)| SuggestionItem::new(word.as_str()))
            .collect()
    }
}
