//! CLI configuration
//!
//! Presentation preferences only; nothing here changes the encoded bits.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use babel_core::{BabelFormat, Separator};
use serde::{Deserialize, Serialize};

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Configuration directory under the platform config dir
const CONFIG_DIR_NAME: &str = "babel-seed";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CliConfig {
    /// Separator and grouping used when formatting is on
    #[serde(default)]
    pub format: BabelFormat,

    /// Format `encode` output even without `--format`
    #[serde(default)]
    pub always_format: bool,
}

impl CliConfig {
    /// Platform default location, e.g. ~/.config/babel-seed/config.json
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Load `explicit` if given, else the default file if it exists, else defaults
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!("Loading config from {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Formatting with command-line overrides applied
    pub fn effective_format(&self, separator: Option<Separator>, group: Option<usize>) -> BabelFormat {
        BabelFormat {
            separator: separator.unwrap_or(self.format.separator),
            group_units: group.unwrap_or(self.format.group_units),
        }
    }
}
