//! Search dialog core.
//!
//! Turns the text and option toggles of the terminal search dialog into a
//! compiled pattern, keeps that pattern cached while the inputs are
//! unchanged, and remembers accepted search strings for completion.
//!
//! Scanning the scrollback with the compiled pattern happens elsewhere.

mod cache;
mod error;
mod history;
mod matcher;
mod pattern;
pub mod types;

pub use cache::PatternCache;
pub use error::CompileError;
pub use history::SearchHistory;
pub use matcher::{CompiledPattern, Matcher, RegexMatcher};
pub use pattern::{compile_flags, compile_pattern};
pub use types::{CompileFlags, CompileKey, SearchOptions};

use termsearch_config::SearchConfig;

/// State owned by one open search dialog.
///
/// Holds the compiled-pattern cache and the history of accepted searches.
/// Dropping the session releases any compiled pattern.
pub struct SearchSession<M: Matcher = RegexMatcher> {
    cache: PatternCache<M>,
    history: SearchHistory,
    default_options: SearchOptions,
}

impl Default for SearchSession<RegexMatcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession<RegexMatcher> {
    /// Create a session with default options and history limits.
    pub fn new() -> Self {
        Self::with_matcher(RegexMatcher)
    }

    /// Create a session seeded from the user's search config.
    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            cache: PatternCache::new(),
            history: SearchHistory::from_config(config),
            default_options: SearchOptions::from_config(config),
        }
    }
}

impl<M: Matcher> SearchSession<M> {
    /// Create a session compiling patterns through `matcher`.
    pub fn with_matcher(matcher: M) -> Self {
        Self {
            cache: PatternCache::with_matcher(matcher),
            history: SearchHistory::new(),
            default_options: SearchOptions::default(),
        }
    }

    /// Options the dialog should show when it opens.
    pub fn default_options(&self) -> SearchOptions {
        self.default_options
    }

    /// Whether the dialog should allow accepting `text` under `options`.
    ///
    /// Empty text is never searchable; regex text must compile.
    pub fn compute_sensitivity(&mut self, text: &str, options: &SearchOptions) -> bool {
        if text.is_empty() {
            return false;
        }
        if !options.use_regex {
            return true;
        }
        self.cache.get_or_compile(text, options).is_ok()
    }

    /// Check that `text` compiles under `options`, returning the diagnostic if not.
    pub fn validate(&mut self, text: &str, options: &SearchOptions) -> Result<(), CompileError> {
        self.cache.get_or_compile(text, options).map(|_| ())
    }

    /// Compiled pattern for `text` under `options`.
    pub fn get_or_compile(
        &mut self,
        text: &str,
        options: &SearchOptions,
    ) -> Result<&M::Artifact, CompileError> {
        self.cache.get_or_compile(text, options)
    }

    /// Handle the dialog being accepted: compile `text` and, if it compiles,
    /// remember it in the history.
    pub fn accept(
        &mut self,
        text: &str,
        options: &SearchOptions,
    ) -> Result<&M::Artifact, CompileError> {
        let artifact = self.cache.get_or_compile(text, options)?;
        self.history.insert(text);
        Ok(artifact)
    }

    /// Remember `text` in the history.
    pub fn commit(&mut self, text: &str) {
        self.history.insert(text);
    }

    /// Past searches, most recent first.
    pub fn history_entries(&self) -> impl Iterator<Item = &str> + '_ {
        self.history.entries()
    }

    /// Past searches starting with `prefix` (ignoring case), most recent first.
    pub fn completions<'a>(&'a self, prefix: &str) -> impl Iterator<Item = &'a str> + use<'a, M> {
        self.history.completions(prefix)
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    /// Release the compiled pattern, e.g. when the dialog is hidden.
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }

    /// Whether a compiled pattern is currently held.
    pub fn has_compiled_pattern(&self) -> bool {
        self.cache.is_cached()
    }
}
