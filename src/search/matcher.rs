//! Matcher capability used to turn pattern strings into compiled artifacts.

use super::error::CompileError;
use super::types::CompileFlags;
use regex::{Regex, RegexBuilder};

/// Compiles pattern strings into artifacts and releases them again.
///
/// The cache calls [`Matcher::release`] exactly once for every artifact it
/// obtained from [`Matcher::compile`].
pub trait Matcher {
    /// Compiled form of a pattern.
    type Artifact;

    /// Compile `pattern` under `flags`.
    fn compile(&self, pattern: &str, flags: CompileFlags) -> Result<Self::Artifact, CompileError>;

    /// Release an artifact previously returned by [`Matcher::compile`].
    fn release(&self, artifact: Self::Artifact) {
        drop(artifact);
    }
}

/// A pattern compiled by [`RegexMatcher`].
#[derive(Clone, Debug)]
pub struct CompiledPattern {
    regex: Regex,
    flags: CompileFlags,
}

impl CompiledPattern {
    /// The pattern string this was compiled from.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Flags the pattern was compiled with.
    pub fn flags(&self) -> CompileFlags {
        self.flags
    }

    /// The underlying compiled regex, for the search executor.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Whether the pattern matches anywhere in `haystack`.
    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }
}

/// [`Matcher`] backed by the `regex` crate.
///
/// The `regex` crate has no switch for property classes separate from its
/// Unicode mode, so [`CompileFlags::UNICODE_CLASSES`] only widens Unicode mode.
/// Literal patterns never contain class syntax after escaping.
#[derive(Clone, Copy, Debug, Default)]
pub struct RegexMatcher;

impl Matcher for RegexMatcher {
    type Artifact = CompiledPattern;

    fn compile(&self, pattern: &str, flags: CompileFlags) -> Result<CompiledPattern, CompileError> {
        let regex = RegexBuilder::new(pattern)
            .multi_line(flags.contains(CompileFlags::MULTILINE))
            .unicode(
                flags.contains(CompileFlags::UNICODE)
                    || flags.contains(CompileFlags::UNICODE_CLASSES),
            )
            .case_insensitive(flags.contains(CompileFlags::CASE_INSENSITIVE))
            .build()
            .map_err(|e| CompileError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;

        Ok(CompiledPattern { regex, flags })
    }
}
