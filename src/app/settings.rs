use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const SETTINGS_ENV_VAR: &str = "PAINTCALC_SETTINGS";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read settings: {0}")]
    Io(#[from] io::Error),
    #[error("could not parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// How results are shown. Settings are only ever read, never written back.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_version")]
    version: u32,

    #[serde(default = "default_unit_suffix")]
    pub unit_suffix: String,

    #[serde(default = "default_decimal_places")]
    pub decimal_places: usize,

    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,
}

// Helper functions for default values
fn default_version() -> u32 {
    1
}
fn default_unit_suffix() -> String {
    "kg".to_string()
}
fn default_decimal_places() -> usize {
    2
}
fn default_placeholder() -> String {
    "--".to_string()
}
fn default_decimal_separator() -> char {
    '.'
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: default_version(),
            unit_suffix: default_unit_suffix(),
            decimal_places: default_decimal_places(),
            placeholder: default_placeholder(),
            decimal_separator: default_decimal_separator(),
        }
    }
}

impl Settings {
    /// Loads settings from `explicit_path`, the `PAINTCALC_SETTINGS` variable
    /// or the user config directory, in that order. Falls back to defaults.
    pub fn load(explicit_path: Option<&Path>) -> Self {
        let Some(path) = explicit_path
            .map(Path::to_path_buf)
            .or_else(Self::settings_path)
        else {
            return Settings::default();
        };

        debug!(target: "settings", "loading settings from {}", path.display());
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                Settings::default()
            }
            Err(err) => {
                warn!(target: "settings", "{}: {}, using defaults", path.display(), err);
                Settings::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str::<Settings>(&contents)?)
    }

    fn settings_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(SETTINGS_ENV_VAR) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        let mut path = dirs::config_dir()?.join("paintcalc");
        path.push("settings.json");
        Some(path)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn is_debug_mode() -> bool {
        std::env::var("PAINTCALC_DEBUG")
            .map(|v| v == "1")
            .unwrap_or(false)
    }
}
