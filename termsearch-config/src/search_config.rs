//! `SearchConfig` — search dialog settings.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings controlling the initial state of the search dialog and its history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Default case sensitivity for search
    #[serde(default = "crate::defaults::bool_false")]
    pub search_case_sensitive: bool,

    /// Default regex mode for search
    #[serde(default = "crate::defaults::bool_false")]
    pub search_regex: bool,

    /// Default whole-word mode for search
    #[serde(default = "crate::defaults::bool_false")]
    pub search_whole_word: bool,

    /// Search towards the top of the scrollback by default
    #[serde(default = "crate::defaults::bool_false")]
    pub search_backwards: bool,

    /// Wrap around when navigating search matches
    #[serde(default = "crate::defaults::bool_true")]
    pub search_wrap_around: bool,

    /// Number of past search strings kept for completion
    #[serde(default = "crate::defaults::search_history_max_entries")]
    pub search_history_max_entries: usize,

    /// Strings with this many characters or fewer are not remembered
    #[serde(default = "crate::defaults::search_history_min_length")]
    pub search_history_min_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_case_sensitive: crate::defaults::bool_false(),
            search_regex: crate::defaults::bool_false(),
            search_whole_word: crate::defaults::bool_false(),
            search_backwards: crate::defaults::bool_false(),
            search_wrap_around: crate::defaults::bool_true(),
            search_history_max_entries: crate::defaults::search_history_max_entries(),
            search_history_min_length: crate::defaults::search_history_min_length(),
        }
    }
}

impl SearchConfig {
    /// Default location of the search config file (XDG convention).
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("termsearch")
            .join("search.yaml")
    }

    /// Load and validate a config from `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_yaml_ng::from_str(&contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        log::info!("Loaded search config from {:?}", path);
        Ok(config)
    }

    /// Load a config from `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("Search config not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Save the config to `path`.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::Serialize)?;

        // Write to a temp file then rename so a crash never leaves a truncated config
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml)?;
        fs::rename(&temp_path, path)?;

        log::debug!("Saved search config to {:?}", path);
        Ok(())
    }

    /// Check field values that serde cannot constrain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_history_max_entries == 0 {
            log::warn!("search_history_max_entries must be at least 1");
            return Err(ConfigError::Validation(
                "search_history_max_entries must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
