//! Sound effects played through macroquad's audio backend
//!
//! Both effects are loaded once at startup; a missing file stops the game
//! before the first round.

use std::path::Path;

use anyhow::anyhow;
use macroquad::audio::{PlaySoundParams, Sound, load_sound, play_sound};

use crate::platform::AudioPlayer;
use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// A projectile leaves a ship
    Fire,
    /// A projectile strikes a ship
    Hit,
}

impl SoundEffect {
    /// File name inside the asset directory
    pub fn file_name(self) -> &'static str {
        match self {
            SoundEffect::Fire => "fire.wav",
            SoundEffect::Hit => "hit.wav",
        }
    }
}

/// Mixer levels taken from the player's settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume {
    master: f32,
    sfx: f32,
    muted: bool,
}

impl Volume {
    pub fn new(master: f32, sfx: f32, muted: bool) -> Self {
        Self {
            master: master.clamp(0.0, 1.0),
            sfx: sfx.clamp(0.0, 1.0),
            muted,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.master_volume, settings.sfx_volume, settings.muted)
    }

    /// Get effective volume
    pub fn effective(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master * self.sfx
        }
    }
}

/// Audio manager for the game
pub struct AudioManager {
    fire: Sound,
    hit: Sound,
    volume: Volume,
}

impl AudioManager {
    /// Load every effect from `asset_dir`
    pub async fn load(asset_dir: &Path, volume: Volume) -> anyhow::Result<Self> {
        let fire = load_effect(asset_dir, SoundEffect::Fire).await?;
        let hit = load_effect(asset_dir, SoundEffect::Hit).await?;
        log::info!("Loaded sound effects from {}", asset_dir.display());
        Ok(Self { fire, hit, volume })
    }

    fn sound(&self, effect: SoundEffect) -> &Sound {
        match effect {
            SoundEffect::Fire => &self.fire,
            SoundEffect::Hit => &self.hit,
        }
    }
}

impl AudioPlayer for AudioManager {
    fn play(&self, effect: SoundEffect) {
        let volume = self.volume.effective();
        if volume <= 0.0 {
            return;
        }
        play_sound(
            self.sound(effect),
            PlaySoundParams {
                looped: false,
                volume,
            },
        );
    }
}

async fn load_effect(asset_dir: &Path, effect: SoundEffect) -> anyhow::Result<Sound> {
    let path = asset_dir.join(effect.file_name());
    let path = path.to_string_lossy();
    load_sound(&path)
        .await
        .map_err(|err| anyhow!("failed to load sound {path}: {err:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_volume() {
        assert_eq!(Volume::new(0.5, 0.5, false).effective(), 0.25);
        assert_eq!(Volume::new(0.8, 1.0, true).effective(), 0.0);
    }

    #[test]
    fn test_volume_clamps() {
        assert_eq!(Volume::new(2.0, -1.0, false), Volume::new(1.0, 0.0, false));
        assert_eq!(Volume::new(3.0, 3.0, false).effective(), 1.0);
    }

    #[test]
    fn test_volume_from_settings() {
        let settings = Settings {
            master_volume: 0.5,
            sfx_volume: 1.0,
            ..Settings::default()
        };
        assert_eq!(Volume::from_settings(&settings).effective(), 0.5);
    }
}
