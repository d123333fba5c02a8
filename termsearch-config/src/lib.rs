//! Configuration for the termsearch search-dialog core.
//!
//! Holds the user-facing defaults for the search dialog (initial option
//! toggles and history limits) and the YAML load/save helpers for them.

pub mod defaults;
pub mod error;
mod search_config;

pub use error::ConfigError;
pub use search_config::SearchConfig;
