//! Game settings and preferences
//!
//! Persisted as `settings.json` in the working directory; defaults apply
//! when the file is absent or malformed.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Mute all audio
    pub muted: bool,

    // === HUD ===
    /// Show the distance readout while running
    pub show_distance: bool,
    /// Show the best distance on the game-over overlay
    pub show_best: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 0.7,
            music_volume: 0.3,
            muted: false,
            show_distance: true,
            show_best: true,
        }
    }
}

impl Settings {
    const FILE_NAME: &'static str = "settings.json";

    /// Load settings from the working directory
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("ignoring malformed {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("using default settings");
                Self::default()
            }
        }
    }

    /// Best-effort save; failure is logged, never surfaced
    pub fn save(&self) {
        self.save_to(Path::new(Self::FILE_NAME));
    }

    pub fn save_to(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    log::warn!("could not save settings to {}: {}", path.display(), e);
                }
            }
            Err(e) => log::warn!("could not serialize settings: {}", e),
        }
    }

    /// Music volume with master and mute applied
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.music_volume).clamp(0.0, 1.0)
        }
    }

    /// Sound effect volume with master and mute applied
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }
}
