//! User configuration and preferences
//!
//! Read-only: the browser never writes this file.

use crate::domain::{Filter, FilterPolicy};
use crate::error::{ExplorerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Directory to open when none is given on the command line
    pub start_directory: Option<PathBuf>,
    /// Filter active at startup
    pub default_filter: Filter,
    /// Keep the active filter when entering another directory
    pub keep_filter_on_navigate: bool,
    /// Show the desktop/documents/downloads sidebar
    pub show_common_directories: bool,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            start_directory: None,
            default_filter: Filter::All,
            keep_filter_on_navigate: false,
            show_common_directories: true,
        }
    }
}

impl UserConfig {
    /// Get the config file path (~/.config/fexplorer/config.json)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fexplorer").join("config.json"))
    }

    /// Load config from the default location, or defaults if there is none
    pub fn load() -> Result<Self> {
        let path = Self::config_path().ok_or_else(|| {
            ExplorerError::ConfigError("Could not determine config directory".to_string())
        })?;
        Self::load_from(&path)
    }

    /// Load config from `path`; a missing file means defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            ExplorerError::ConfigError(format!("Failed to read config file: {}", e))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            ExplorerError::ConfigError(format!("Failed to parse config file: {}", e))
        })
    }

    pub fn filter_policy(&self) -> FilterPolicy {
        if self.keep_filter_on_navigate {
            FilterPolicy::Preserve
        } else {
            FilterPolicy::Reset
        }
    }
}
