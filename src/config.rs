//! Settings loaded from `config/danstat.toml`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::definitions::{LanguageCode, ThemeMode};

pub const DEFAULT_CONFIG_PATH: &str = "config/danstat.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub preferences: PreferenceSettings,
    pub ui: UiSettings,
    pub logging: LoggingSettings,
}

/// Initial values for the session preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceSettings {
    pub language: LanguageCode,
    pub theme: ThemeMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub tick_rate_ms: u64,
    pub status_timeout_ms: u64,
    /// The sidebar hides itself on terminals narrower than this.
    pub sidebar_min_width: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            status_timeout_ms: 4000,
            sidebar_min_width: 90,
        }
    }
}

impl UiSettings {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }

    pub fn status_timeout(&self) -> Duration {
        Duration::from_millis(self.status_timeout_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub file: PathBuf,
    /// Optional log4rs YAML file. Takes precedence over `level` and `file`.
    pub config: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            file: PathBuf::from("danstat.log"),
            config: None,
        }
    }
}

impl LoggingSettings {
    /// Relative log files are placed in the system temp directory.
    pub fn file_path(&self) -> PathBuf {
        if self.file.is_absolute() {
            self.file.clone()
        } else {
            std::env::temp_dir().join(&self.file)
        }
    }
}

impl Settings {
    /// Reads settings from `path`. A missing file yields the defaults, a
    /// malformed one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings: {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("failed to parse settings: {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}
