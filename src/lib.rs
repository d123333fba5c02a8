// Library for the search dialog of a terminal emulator.
//
// Everything here runs synchronously on the UI thread. A `SearchSession` is
// owned by exactly one dialog and is never shared or locked.

pub mod mru;
pub mod search;

pub mod config {
    //! Search configuration re-exports from the termsearch-config crate.
    pub use termsearch_config::{ConfigError, SearchConfig, defaults};
}

pub use search::{CompileError, SearchOptions, SearchSession};
