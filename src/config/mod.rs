// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_reel::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.skip_secs = Some(10.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedReel";

/// Skip increment applied by the forward/back transport buttons.
/// Fixed at player construction, symmetric in both directions.
pub const DEFAULT_SKIP_SECS: f64 = 5.0;

/// Bounds for a user-configured skip increment.
pub const MIN_SKIP_SECS: f64 = 0.5;
pub const MAX_SKIP_SECS: f64 = 60.0;

/// Source shown when neither the CLI nor the config name one.
pub const DEFAULT_SOURCE: &str = "video/tears-of-steel-battle-clip-medium.mp4";

/// Duration reported by the built-in clock surface for the default source.
pub const DEFAULT_DURATION_HINT_SECS: f64 = 32.0;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub skip_secs: Option<f64>,
    #[serde(default)]
    pub autoplay: Option<bool>,
    #[serde(default)]
    pub source: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            skip_secs: Some(DEFAULT_SKIP_SECS),
            autoplay: Some(false),
            source: None,
        }
    }
}

/// Ensures skip increments stay inside the supported range so persisted
/// configs cannot request nonsensical values.
pub fn clamp_skip_secs(value: f64) -> f64 {
    if !value.is_finite() {
        return DEFAULT_SKIP_SECS;
    }
    value.clamp(MIN_SKIP_SECS, MAX_SKIP_SECS)
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            language: Some("fr".to_string()),
            skip_secs: Some(10.0),
            autoplay: Some(true),
            source: Some("clip.mp4".to_string()),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.language, config.language);
        assert_eq!(loaded.skip_secs, config.skip_secs);
        assert_eq!(loaded.autoplay, config.autoplay);
        assert_eq!(loaded.source, config.source);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");
        let config = Config::default();

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_sets_skip_and_autoplay() {
        let config = Config::default();
        assert_eq!(config.skip_secs, Some(DEFAULT_SKIP_SECS));
        assert_eq!(config.autoplay, Some(false));
    }

    #[test]
    fn clamp_skip_secs_bounds_input() {
        assert_eq!(clamp_skip_secs(0.0), MIN_SKIP_SECS);
        assert_eq!(clamp_skip_secs(5.0), 5.0);
        assert_eq!(clamp_skip_secs(500.0), MAX_SKIP_SECS);
        assert_eq!(clamp_skip_secs(f64::NAN), DEFAULT_SKIP_SECS);
    }
}
