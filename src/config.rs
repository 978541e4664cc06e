use std::path::PathBuf;

use chrono::{FixedOffset, Offset, Utc};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::genre::CustomArtistConfig;

/// Application configuration loaded from TOML config file.
/// All fields have sensible defaults; the config file is optional.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the league CSV exports (overrides XDG default).
    pub data_dir: Option<PathBuf>,
    /// League time zone as minutes east of UTC, used for late-night hours.
    pub utc_offset_minutes: i32,
    /// Custom artist → genre definitions (merged with built-in registry).
    #[serde(rename = "artists")]
    pub custom_artists: Vec<CustomArtistConfig>,
}

/// Settings the engine itself needs, detached from file handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Offset applied to timestamps before reading a local hour.
    pub utc_offset: FixedOffset,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            utc_offset: Utc.fix(),
        }
    }
}

impl AppConfig {
    /// Load config from `~/.config/musicleague/config.toml`.
    /// Returns default config if file doesn't exist.
    /// Logs a warning if the file exists but can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        match config_path {
            Some(path) if path.exists() => {
                match std::fs::read_to_string(&path) {
                    Ok(contents) => {
                        match Self::parse(&contents) {
                            Ok(config) => {
                                log::info!("Loaded config from {}", path.display());
                                config
                            }
                            Err(e) => {
                                log::warn!(
                                    "Failed to parse {}: {}. Using defaults.",
                                    path.display(),
                                    e
                                );
                                Self::default()
                            }
                        }
                    }
                    Err(e) => {
                        log::warn!(
                            "Failed to read {}: {}. Using defaults.",
                            path.display(),
                            e
                        );
                        Self::default()
                    }
                }
            }
            _ => {
                log::debug!("No config file found, using defaults");
                Self::default()
            }
        }
    }

    fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<AppConfig>(contents)
    }

    /// Engine options; an out-of-range offset falls back to UTC.
    pub fn engine_options(&self) -> EngineOptions {
        let seconds = self.utc_offset_minutes.saturating_mul(60);
        match FixedOffset::east_opt(seconds) {
            Some(utc_offset) => EngineOptions { utc_offset },
            None => {
                log::warn!(
                    "utc_offset_minutes = {} is out of range, using UTC",
                    self.utc_offset_minutes
                );
                EngineOptions::default()
            }
        }
    }

    /// Resolve the data directory: CLI flag, then config, then XDG default.
    pub fn resolve_data_dir(&self, cli: Option<PathBuf>) -> PathBuf {
        cli.or_else(|| self.data_dir.clone())
            .unwrap_or_else(default_data_dir)
    }

    /// Get the config file path.
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", crate::APP_NAME)
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

/// Resolve the default data directory using XDG data directory.
pub fn default_data_dir() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("", "", crate::APP_NAME) {
        dirs.data_dir().to_path_buf()
    } else {
        // Fallback: current directory
        PathBuf::from("data")
    }
}
