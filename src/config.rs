//! Configuration
//!
//! Fixed logical resolution and font sizes, plus runtime settings loaded from
//! an optional RON file (`settings.ron`, or the path in `GAME_SETTINGS`).

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::scene::Lang;

/// Logical screen width (portrait 9:16, HD)
pub const SCREEN_WIDTH: f32 = 1080.0;
/// Logical screen height
pub const SCREEN_HEIGHT: f32 = 1920.0;

/// Font size used when a requested size isn't registered
pub const DEFAULT_FONT_SIZE: u16 = 16;
/// Larger face used for headings
pub const TITLE_FONT_SIZE: u16 = 28;
/// Every font size registered at load time
pub const FONT_SIZES: [u16; 2] = [DEFAULT_FONT_SIZE, TITLE_FONT_SIZE];

/// Default settings file, relative to the working directory
pub const SETTINGS_FILE: &str = "settings.ron";
/// Environment variable overriding the settings file path
pub const SETTINGS_ENV: &str = "GAME_SETTINGS";

/// Errors from loading the settings file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read settings {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Runtime settings
///
/// Every field is optional in the RON file; missing ones take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_title: String,
    pub window_width: i32,
    pub window_height: i32,
    /// Background music volume (0.0-1.0)
    pub bgm_volume: f32,
    /// TrueType file under assets/fonts
    pub font_file: String,
    /// Read assets from this directory tree instead of the embedded bundle
    pub assets_dir: Option<PathBuf>,
    pub lang: Lang,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "mobile-game-template".to_string(),
            window_width: 540,
            window_height: 960,
            bgm_volume: 0.3,
            font_file: "DejaVuSans.ttf".to_string(),
            assets_dir: None,
            lang: Lang::En,
        }
    }
}

impl Settings {
    /// Path of the settings file: `GAME_SETTINGS` if set, else `settings.ron`
    pub fn path() -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE))
    }

    /// Parse settings from RON text
    pub fn from_ron(text: &str, path: &Path) -> Result<Self, ConfigError> {
        ron::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load settings from `path`, falling back to defaults if the file doesn't exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_ron(&text, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    /// Clamp values that would otherwise misbehave at runtime
    pub fn sanitized(mut self) -> Self {
        self.bgm_volume = self.bgm_volume.clamp(0.0, 1.0);
        self.window_width = self.window_width.max(1);
        self.window_height = self.window_height.max(1);
        self
    }
}
