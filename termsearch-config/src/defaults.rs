//! Default value functions for configuration.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes on
//! [`crate::SearchConfig`] fields.

/// Maximum number of remembered search strings.
pub const SEARCH_HISTORY_MAX_ENTRIES: usize = 10;

/// Strings of this many characters or fewer are never remembered.
pub const SEARCH_HISTORY_MIN_LENGTH: usize = 3;

pub fn bool_false() -> bool {
    false
}

pub fn bool_true() -> bool {
    true
}

pub fn search_history_max_entries() -> usize {
    SEARCH_HISTORY_MAX_ENTRIES
}

pub fn search_history_min_length() -> usize {
    SEARCH_HISTORY_MIN_LENGTH
}
