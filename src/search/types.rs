//! Types for search pattern compilation.

use std::ops::{BitOr, BitOrAssign};
use termsearch_config::SearchConfig;

/// Option toggles selected in the search dialog.
///
/// `backwards` and `wrap_around` only steer match navigation, which happens
/// outside this crate; they never influence the compiled pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SearchOptions {
    /// Whether search is case-sensitive.
    pub case_sensitive: bool,
    /// Whether to match whole words only.
    pub whole_word: bool,
    /// Whether the search text is a regular expression.
    pub use_regex: bool,
    /// Whether to search towards the top of the scrollback.
    pub backwards: bool,
    /// Whether to wrap around when navigating matches.
    pub wrap_around: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            whole_word: false,
            use_regex: false,
            backwards: false,
            wrap_around: true,
        }
    }
}

impl SearchOptions {
    /// Initial option state from the user's search config.
    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            case_sensitive: config.search_case_sensitive,
            whole_word: config.search_whole_word,
            use_regex: config.search_regex,
            backwards: config.search_backwards,
            wrap_around: config.search_wrap_around,
        }
    }

    /// The subset of options that affects pattern compilation.
    pub fn compile_key(&self) -> CompileKey {
        CompileKey::from(self)
    }
}

/// The options a compiled pattern depends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CompileKey {
    pub case_sensitive: bool,
    pub whole_word: bool,
    pub use_regex: bool,
}

impl From<&SearchOptions> for CompileKey {
    fn from(options: &SearchOptions) -> Self {
        Self {
            case_sensitive: options.case_sensitive,
            whole_word: options.whole_word,
            use_regex: options.use_regex,
        }
    }
}

/// Bitset of flags handed to a [`super::Matcher`] alongside the pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CompileFlags(u8);

impl CompileFlags {
    /// `^` and `$` match at line boundaries.
    pub const MULTILINE: Self = Self(1 << 0);
    /// Match on Unicode scalar values rather than bytes.
    pub const UNICODE: Self = Self(1 << 1);
    /// Ignore letter case.
    pub const CASE_INSENSITIVE: Self = Self(1 << 2);
    /// Allow Unicode property classes such as `\p{Greek}`.
    pub const UNICODE_CLASSES: Self = Self(1 << 3);

    /// A set with no flags.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Raw bit representation.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether every flag in `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Return `self` with `other` set when `enabled` is true.
    pub const fn with(self, other: Self, enabled: bool) -> Self {
        if enabled { Self(self.0 | other.0) } else { self }
    }
}

impl BitOr for CompileFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for CompileFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
