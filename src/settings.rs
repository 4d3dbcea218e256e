//! Game settings and preferences
//!
//! Read from `settings.json` in the working directory when present. Gameplay
//! rules are not configurable here; see `GameConfig`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding images and sounds
    pub asset_dir: PathBuf,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence all effects
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("assets"),
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "settings.json";

    /// Load settings from `path`, falling back to defaults when the file does
    /// not exist. A file that exists but cannot be parsed is an error.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::info!("No {} found, using default settings", path.display());
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings = Self::from_json(&json)
            .with_context(|| format!("invalid settings in {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse settings JSON; missing fields take their default value
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.master_volume = settings.master_volume.clamp(0.0, 1.0);
        settings.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "muted": true }"#).unwrap();
        assert!(settings.muted);
        assert_eq!(settings.asset_dir, PathBuf::from("assets"));
        assert_eq!(settings.master_volume, 0.8);
    }

    #[test]
    fn test_volumes_clamped() {
        let settings =
            Settings::from_json(r#"{ "master_volume": 4.0, "sfx_volume": -2.0 }"#).unwrap();
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.sfx_volume, 0.0);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = Path::new("definitely/not/here/settings.json");
        assert_eq!(Settings::load(path).unwrap(), Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("star_duel_settings_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "asset_dir": "media", "sfx_volume": 0.5 }"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(settings.asset_dir, PathBuf::from("media"));
        assert_eq!(settings.sfx_volume, 0.5);
    }
}
