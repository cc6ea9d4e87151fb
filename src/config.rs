//! Application configuration module
//!
//! Settings are persisted with `confy` in the OS-specific config directory.

use crate::constant::{
    APP_NAME, DEFAULT_CACHE_CAPACITY, DEFAULT_CONTEXT_LINES, DEFAULT_MAX_TABLE_CELLS,
};
use crate::diff::{DiffCache, DiffEngine};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Confy(#[from] confy::ConfyError),

    #[error("Unknown view mode: {0}")]
    UnknownView(String),
}

pub struct Config {
    pub settings: Settings,
}

impl Config {
    /// Load configuration from disk, creating default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Settings = confy::load(APP_NAME, None)?;
        info!("Load config from {:?}", Self::config_path()?);
        Ok(Self { settings })
    }

    /// Save current configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, None, &self.settings)?;
        info!("Save config to {:?}", Self::config_path()?);
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(confy::get_configuration_file_path(APP_NAME, None)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Falling back to default settings: {}", e);
            Self {
                settings: Settings::default(),
            }
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub diff: DiffSettings,
}

/// Which rendering of a diff to produce
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Split,
    Unified,
    Suggestion,
}

impl FromStr for ViewMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "split" => Ok(ViewMode::Split),
            "unified" => Ok(ViewMode::Unified),
            "suggestion" => Ok(ViewMode::Suggestion),
            other => Err(ConfigError::UnknownView(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSettings {
    /// Unchanged lines kept around each change in collapsed views
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,

    /// LCS table size above which the Myers fallback is used (0 = no limit)
    #[serde(default = "default_max_table_cells")]
    pub max_table_cells: usize,

    /// Edit scripts kept in memory
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,

    #[serde(default)]
    pub default_view: ViewMode,
}

fn default_context_lines() -> usize {
    DEFAULT_CONTEXT_LINES
}

fn default_max_table_cells() -> usize {
    DEFAULT_MAX_TABLE_CELLS
}

fn default_cache_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}

impl Default for DiffSettings {
    fn default() -> Self {
        Self {
            context_lines: DEFAULT_CONTEXT_LINES,
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            default_view: ViewMode::default(),
        }
    }
}

impl DiffSettings {
    pub fn engine(&self) -> DiffEngine {
        DiffEngine::new(self.context_lines, self.max_table_cells)
    }

    pub fn cache(&self) -> DiffCache {
        DiffCache::new(self.cache_capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"diff": {"context_lines": 5}}"#).unwrap();
        assert_eq!(settings.diff.context_lines, 5);
        assert_eq!(settings.diff.max_table_cells, DEFAULT_MAX_TABLE_CELLS);
        assert_eq!(settings.diff.cache_capacity, DEFAULT_CACHE_CAPACITY);
        assert_eq!(settings.diff.default_view, ViewMode::Split);

        let empty: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Settings::default());
    }

    #[test]
    fn settings_build_engine() {
        let settings = DiffSettings {
            context_lines: 1,
            max_table_cells: 0,
            ..DiffSettings::default()
        };
        let engine = settings.engine();
        assert_eq!(engine.context_lines(), 1);
        assert_eq!(engine.max_table_cells(), 0);
    }

    #[test]
    fn view_mode_parsing() {
        assert_eq!("unified".parse::<ViewMode>().unwrap(), ViewMode::Unified);
        assert_eq!("suggestion".parse::<ViewMode>().unwrap(), ViewMode::Suggestion);
        assert!(matches!(
            "sideways".parse::<ViewMode>(),
            Err(ConfigError::UnknownView(_))
        ));
    }
}
