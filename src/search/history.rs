//! Session-scoped history of committed search strings.

use crate::mru::MruSet;
use termsearch_config::SearchConfig;
use termsearch_config::defaults::{SEARCH_HISTORY_MAX_ENTRIES, SEARCH_HISTORY_MIN_LENGTH};

/// Bounded, deduplicated search history, newest first.
///
/// Lengths are counted in Unicode scalar values, so `"héllo"` is five long.
#[derive(Debug)]
pub struct SearchHistory {
    entries: MruSet<String>,
    min_length: usize,
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchHistory {
    /// History holding 10 entries longer than 3 characters.
    pub fn new() -> Self {
        Self::with_limits(SEARCH_HISTORY_MAX_ENTRIES, SEARCH_HISTORY_MIN_LENGTH)
    }

    /// History holding `max_entries` entries longer than `min_length` characters.
    ///
    /// `max_entries` of 0 is raised to 1. Config files with 0 are rejected at
    /// load time by `SearchConfig::validate`; code callers get the clamp.
    pub fn with_limits(max_entries: usize, min_length: usize) -> Self {
        Self {
            entries: MruSet::new(max_entries),
            min_length,
        }
    }

    /// History sized from the user's search config.
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::with_limits(
            config.search_history_max_entries,
            config.search_history_min_length,
        )
    }

    /// Remember `text` as the most recent search.
    ///
    /// Text of `min_length` characters or fewer is ignored. Text already in the
    /// history moves to the front; otherwise the oldest entry is evicted when full.
    pub fn insert(&mut self, text: &str) {
        if text.chars().count() <= self.min_length {
            log::trace!("Search history ignoring short entry '{}'", text);
            return;
        }

        if let Some(evicted) = self.entries.insert(text.to_string()) {
            log::debug!("Search history evicted '{}'", evicted);
        }
    }

    /// Entries from most to least recent.
    pub fn entries(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(String::as_str)
    }

    /// Entries starting with `prefix`, most recent first.
    ///
    /// Matching ignores case. Prefixes shorter than the admission length
    /// produce no completions.
    pub fn completions<'a>(&'a self, prefix: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        let long_enough = prefix.chars().count() >= self.min_length;
        let folded = prefix.to_lowercase();
        self.entries()
            .filter(move |entry| long_enough && entry.to_lowercase().starts_with(&folded))
    }

    pub fn contains(&self, text: &str) -> bool {
        self.entries.contains(text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.entries.capacity()
    }

    /// Update max entries and truncate if needed. 0 is raised to 1.
    pub fn set_max_entries(&mut self, max: usize) {
        self.entries.set_capacity(max);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(history: &SearchHistory) -> Vec<&str> {
        history.entries().collect()
    }

    #[test]
    fn test_add_and_deduplicate() {
        let mut history = SearchHistory::new();
        history.insert("hello world");
        history.insert("food");
        history.insert("hello world");

        assert_eq!(entries(&history), vec!["hello world", "food"]);
    }

    #[test]
    fn test_bounded_to_ten_most_recent() {
        let mut history = SearchHistory::new();
        let texts: Vec<String> = (0..15).map(|i| format!("query {i}")).collect();
        for text in &texts {
            history.insert(text);
        }

        let expected: Vec<&str> = texts.iter().rev().take(10).map(String::as_str).collect();
        assert_eq!(history.len(), 10);
        assert_eq!(entries(&history), expected);
    }

    #[test]
    fn test_short_entries_ignored() {
        let mut history = SearchHistory::new();
        history.insert("");
        history.insert("ab");
        history.insert("abc");
        assert!(history.is_empty());

        history.insert("abcd");
        assert_eq!(entries(&history), vec!["abcd"]);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let mut history = SearchHistory::new();
        // Three chars, six bytes
        history.insert("äöü");
        assert!(history.is_empty());

        history.insert("äöüß");
        assert!(history.contains("äöüß"));
    }

    #[test]
    fn test_entries_restartable() {
        let mut history = SearchHistory::new();
        history.insert("first query");
        history.insert("second query");

        assert_eq!(entries(&history), entries(&history));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_completions() {
        let mut history = SearchHistory::new();
        history.insert("error: disk");
        history.insert("warning: cpu");
        history.insert("error: net");

        let found: Vec<&str> = history.completions("err").collect();
        assert_eq!(found, vec!["error: net", "error: disk"]);

        let found: Vec<&str> = history.completions("WARN").collect();
        assert_eq!(found, vec!["warning: cpu"]);

        assert_eq!(history.completions("er").count(), 0);
        assert_eq!(history.completions("fatal").count(), 0);
    }

    #[test]
    fn test_from_config_limits() {
        let config = SearchConfig {
            search_history_max_entries: 2,
            search_history_min_length: 1,
            ..Default::default()
        };
        let mut history = SearchHistory::from_config(&config);
        history.insert("a");
        history.insert("ab");
        history.insert("cd");
        history.insert("ef");

        assert_eq!(history.max_entries(), 2);
        assert_eq!(entries(&history), vec!["ef", "cd"]);
    }

    #[test]
    fn test_zero_max_entries_clamped_to_one() {
        let mut history = SearchHistory::with_limits(0, 3);
        assert_eq!(history.max_entries(), 1);
        history.insert("first query");
        history.insert("second query");
        assert_eq!(entries(&history), vec!["second query"]);

        let mut history = SearchHistory::new();
        history.insert("alpha query");
        history.insert("bravo query");
        history.set_max_entries(0);
        assert_eq!(history.max_entries(), 1);
        assert_eq!(entries(&history), vec!["bravo query"]);
    }

    #[test]
    fn test_set_max_entries_truncates() {
        let mut history = SearchHistory::new();
        for text in ["alpha", "bravo", "charlie", "delta"] {
            history.insert(text);
        }
        history.set_max_entries(2);
        assert_eq!(entries(&history), vec!["delta", "charlie"]);

        history.clear();
        assert!(history.is_empty());
    }
}
