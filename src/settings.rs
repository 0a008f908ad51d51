//! Presentation settings
//!
//! Read from a JSON file next to the game. Gameplay constants are not settings;
//! only how the window looks lives here.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable naming an alternative settings file
pub const SETTINGS_ENV_VAR: &str = "PONG_SETTINGS";

/// Settings file looked up in the working directory by default
pub const DEFAULT_SETTINGS_FILE: &str = "pong_settings.json";

/// Window and scoreboard preferences
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title
    pub title: String,
    /// TrueType font for the scoreboard; the built-in font when unset
    pub font_path: Option<PathBuf>,
    /// Scoreboard font size in pixels
    pub font_size: f32,
    /// Let the GPU present wait for vertical sync on top of the frame sleep
    pub vsync: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Pong".to_string(),
            font_path: None,
            font_size: 28.0,
            vsync: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Path of the settings file: `$PONG_SETTINGS`, else `pong_settings.json`
    pub fn path() -> PathBuf {
        std::env::var_os(SETTINGS_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
    }

    /// Load settings from the default location
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    /// Load settings from `path`, falling back to defaults if it is missing
    /// or unreadable
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
