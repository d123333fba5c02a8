//! Single-entry cache of the compiled search pattern.

use super::error::CompileError;
use super::matcher::{Matcher, RegexMatcher};
use super::pattern::{compile_flags, compile_pattern};
use super::types::{CompileKey, SearchOptions};

/// The cached artifact together with the inputs that produced it.
struct CacheEntry<A> {
    source_text: String,
    key: CompileKey,
    artifact: A,
}

impl<A> CacheEntry<A> {
    fn is_coherent(&self, text: &str, key: &CompileKey) -> bool {
        self.source_text == text && self.key == *key
    }
}

/// Holds at most one compiled pattern and recompiles only when the search
/// text or a compile-relevant option changes.
///
/// The previous artifact is handed back to the matcher before a new one is
/// compiled, on [`PatternCache::invalidate`], and when the cache is dropped.
pub struct PatternCache<M: Matcher = RegexMatcher> {
    matcher: M,
    entry: Option<CacheEntry<M::Artifact>>,
}

impl Default for PatternCache<RegexMatcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternCache<RegexMatcher> {
    /// Create an empty cache using the `regex` crate.
    pub fn new() -> Self {
        Self::with_matcher(RegexMatcher)
    }
}

impl<M: Matcher> PatternCache<M> {
    /// Create an empty cache compiling through `matcher`.
    pub fn with_matcher(matcher: M) -> Self {
        Self {
            matcher,
            entry: None,
        }
    }

    /// Return the compiled pattern for `text` under `options`, compiling it
    /// if the cached one was built from different inputs.
    ///
    /// On failure the cache is left empty so the next call retries.
    pub fn get_or_compile(
        &mut self,
        text: &str,
        options: &SearchOptions,
    ) -> Result<&M::Artifact, CompileError> {
        let key = options.compile_key();

        let entry = match self.entry.take() {
            Some(entry) if entry.is_coherent(text, &key) => {
                log::trace!("Search pattern cache hit for '{}'", text);
                self.entry.insert(entry)
            }
            stale => {
                if let Some(old) = stale {
                    self.matcher.release(old.artifact);
                }

                let pattern = compile_pattern(text, options);
                let flags = compile_flags(options);
                log::debug!(
                    "Compiling search pattern '{}' (flags {:#06b})",
                    pattern,
                    flags.bits()
                );

                let artifact = self.matcher.compile(&pattern, flags).inspect_err(|e| {
                    log::debug!("Invalid search pattern '{}': {}", pattern, e.message());
                })?;

                self.entry.insert(CacheEntry {
                    source_text: text.to_string(),
                    key,
                    artifact,
                })
            }
        };

        Ok(&entry.artifact)
    }

    /// Release the cached artifact, if any. Safe to call on an empty cache.
    pub fn invalidate(&mut self) {
        if let Some(old) = self.entry.take() {
            log::trace!("Releasing search pattern for '{}'", old.source_text);
            self.matcher.release(old.artifact);
        }
    }

    /// Whether an artifact is currently cached.
    pub fn is_cached(&self) -> bool {
        self.entry.is_some()
    }

    /// Search text the cached artifact was compiled from.
    pub fn cached_source(&self) -> Option<&str> {
        self.entry.as_ref().map(|e| e.source_text.as_str())
    }
}

impl<M: Matcher> Drop for PatternCache<M> {
    fn drop(&mut self) {
        self.invalidate();
    }
}
