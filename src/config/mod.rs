// SPDX-License-Identifier: MPL-2.0
//! This module handles the notifier's settings, including loading and saving
//! them from a `settings.toml` file, and the dotted-path resolver used to read
//! per-notification configuration.
//!
//! # Examples
//!
//! ```no_run
//! use toastdeck::config::{self, Settings};
//! use std::path::PathBuf;
//!
//! // Load existing settings
//! let mut settings = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! settings.default_stack = Some("top-right".to_string());
//!
//! // Save the modified settings
//! config::save(&settings).expect("Failed to save settings");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&settings, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.default_stack, Some("top-right".to_string()));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;
pub mod path;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "toastdeck";

/// Notifier-wide settings.
///
/// Every field is optional so that partial files stay valid; the accessor
/// methods fall back to the values in [`defaults`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Prefix prepended to generated notification ids.
    #[serde(default)]
    pub id_prefix: Option<String>,
    #[serde(default)]
    pub show_delay_ms: Option<u64>,
    #[serde(default)]
    pub close_delay_ms: Option<u64>,
    /// Removal delay used by notifications that do not set `removeDelay`.
    #[serde(default)]
    pub remove_delay_ms: Option<u64>,
    /// Auto-dismiss timeout used by notifications that do not set `autotimeout`.
    #[serde(default)]
    pub autotimeout_ms: Option<i64>,
    #[serde(default)]
    pub default_stack: Option<String>,
    /// Root classes used by notifications that do not set `classes`.
    #[serde(default)]
    pub classes: Option<Vec<String>>,
    #[serde(default)]
    pub history_capacity: Option<usize>,
    /// Icon markup overriding the built-in set, keyed by icon name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub icons: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            id_prefix: None,
            show_delay_ms: Some(DEFAULT_SHOW_DELAY_MS),
            close_delay_ms: Some(DEFAULT_CLOSE_DELAY_MS),
            remove_delay_ms: Some(DEFAULT_REMOVE_DELAY_MS),
            autotimeout_ms: Some(DEFAULT_AUTOTIMEOUT_MS),
            default_stack: Some(DEFAULT_STACK.to_string()),
            classes: Some(DEFAULT_CLASSES.iter().map(|c| (*c).to_string()).collect()),
            history_capacity: Some(DEFAULT_HISTORY_CAPACITY),
            icons: BTreeMap::new(),
        }
    }
}

impl Settings {
    #[must_use]
    pub fn show_delay(&self) -> Duration {
        Duration::from_millis(self.show_delay_ms.unwrap_or(DEFAULT_SHOW_DELAY_MS))
    }

    #[must_use]
    pub fn close_delay(&self) -> Duration {
        Duration::from_millis(self.close_delay_ms.unwrap_or(DEFAULT_CLOSE_DELAY_MS))
    }

    #[must_use]
    pub fn remove_delay_ms(&self) -> u64 {
        self.remove_delay_ms.unwrap_or(DEFAULT_REMOVE_DELAY_MS)
    }

    #[must_use]
    pub fn autotimeout_ms(&self) -> i64 {
        self.autotimeout_ms.unwrap_or(DEFAULT_AUTOTIMEOUT_MS)
    }

    #[must_use]
    pub fn default_stack(&self) -> &str {
        self.default_stack.as_deref().unwrap_or(DEFAULT_STACK)
    }

    /// Returns the root classes for notifications without their own list.
    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        match &self.classes {
            Some(classes) => classes.clone(),
            None => DEFAULT_CLASSES.iter().map(|c| (*c).to_string()).collect(),
        }
    }

    #[must_use]
    pub fn history_capacity(&self) -> usize {
        self.history_capacity.unwrap_or(DEFAULT_HISTORY_CAPACITY)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Settings> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Settings::default())
}

pub fn save(settings: &Settings) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(settings, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(settings) => Ok(settings),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Invalid settings file, using defaults");
            Ok(Settings::default())
        }
    }
}

pub fn save_to_path(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(settings)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let mut settings = Settings {
            id_prefix: Some("toast-".to_string()),
            remove_delay_ms: Some(250),
            default_stack: Some("bottom".to_string()),
            ..Settings::default()
        };
        settings
            .icons
            .insert("success".to_string(), "<svg/>".to_string());
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&settings, &config_path).expect("failed to save settings");
        let loaded = load_from_path(&config_path).expect("failed to load settings");

        assert_eq!(loaded, settings);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn load_from_missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn partial_file_falls_back_per_field() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "show_delay_ms = 10\n").expect("failed to write settings");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.show_delay(), Duration::from_millis(10));
        assert_eq!(loaded.close_delay(), Duration::from_millis(DEFAULT_CLOSE_DELAY_MS));
        assert_eq!(loaded.default_stack(), DEFAULT_STACK);
        assert_eq!(loaded.classes(), vec!["notification", "notification-fade"]);
    }

    #[test]
    fn default_settings_match_defaults_module() {
        let settings = Settings::default();
        assert_eq!(settings.remove_delay_ms(), DEFAULT_REMOVE_DELAY_MS);
        assert_eq!(settings.autotimeout_ms(), DEFAULT_AUTOTIMEOUT_MS);
        assert_eq!(settings.history_capacity(), DEFAULT_HISTORY_CAPACITY);
        assert!(settings.icons.is_empty());
    }
}
