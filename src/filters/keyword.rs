//! Whole-word keyword filtering across name, description, and category.

use super::Filter;
use crate::catalog::Product;
use regex_lite::Regex;
use tracing::warn;

/// Splits raw keyword text into lowercase search terms.
pub fn tokenize(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(|t| t.to_lowercase()).collect()
}

/// Builds a case-insensitive whole-word pattern for a literal term.
pub fn word_pattern(term: &str) -> String {
    format!(r"(?i)\b{}\b", regex_lite::escape(term))
}

/// A single search term compiled into a word-boundary matcher.
#[derive(Debug, Clone)]
struct WordMatcher {
    term: String,
    // None when the pattern failed to compile; such a term matches nothing.
    regex: Option<Regex>,
}

impl WordMatcher {
    fn new(term: String) -> Self {
        let regex = match Regex::new(&word_pattern(&term)) {
            Ok(re) => Some(re),
            Err(e) => {
                warn!("Keyword '{}' cannot be matched: {}", term, e);
                None
            }
        };

        Self { term, regex }
    }

    fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(text))
    }
}

/// Filters products whose text fields contain every keyword as a whole word.
pub struct KeywordFilter {
    matchers: Vec<WordMatcher>,
}

impl KeywordFilter {
    /// Creates a filter requiring all `terms`.
    pub fn new(terms: Vec<String>) -> Self {
        Self {
            matchers: terms
                .into_iter()
                .map(|t| t.to_lowercase())
                .filter(|t| !t.is_empty())
                .map(WordMatcher::new)
                .collect(),
        }
    }

    /// Creates a filter from raw, whitespace-separated keyword text.
    pub fn parse(raw: &str) -> Self {
        Self::new(tokenize(raw))
    }

    /// Returns the lowercase terms this filter requires.
    pub fn terms(&self) -> Vec<&str> {
        self.matchers.iter().map(|m| m.term.as_str()).collect()
    }
}

impl Filter for KeywordFilter {
    fn matches(&self, product: &Product) -> bool {
        let fields = product.searchable_fields().map(str::to_lowercase);

        self.matchers.iter().all(|m| fields.iter().any(|field| m.is_match(field)))
    }

    fn description(&self) -> String {
        if self.matchers.is_empty() {
            "Keywords: any".to_string()
        } else {
            format!("Keywords: {}", self.terms().join(", "))
        }
    }
}
