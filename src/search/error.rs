//! Errors surfaced by search pattern compilation.

use thiserror::Error;

/// A pattern the matcher refused to compile.
///
/// Only user-supplied regular expressions can trigger this; escaped literal
/// text always compiles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The pattern is not valid in the matcher's grammar.
    #[error("Invalid search pattern '{pattern}': {message}")]
    InvalidPattern {
        /// Pattern string handed to the matcher.
        pattern: String,
        /// Matcher diagnostic, suitable for showing next to the search field.
        message: String,
    },
}

impl CompileError {
    /// Matcher diagnostic without the pattern prefix.
    pub fn message(&self) -> &str {
        match self {
            CompileError::InvalidPattern { message, .. } => message,
        }
    }
}
