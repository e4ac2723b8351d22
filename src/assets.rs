//! Optional on-disk assets with graceful fallback
//!
//! Every asset is optional: a missing or unparsable file degrades to a
//! built-in default with a logged diagnostic. The game must run correctly
//! with zero assets present.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Audio file extensions probed, in order of preference
const AUDIO_EXTENSIONS: [&str; 4] = ["ogg", "mp3", "wav", "flac"];

/// Glyphs and color names for the terminal renderer.
/// Loaded from `theme.json`; any omitted field keeps its default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub player_glyph: char,
    pub bridge_glyph: char,
    pub fire_glyph: char,
    pub player_color: String,
    pub bridge_color: String,
    pub fire_color: String,
    pub text_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            player_glyph: '@',
            bridge_glyph: '=',
            fire_glyph: '^',
            player_color: "white".into(),
            bridge_color: "dark_yellow".into(),
            fire_color: "red".into(),
            text_color: "white".into(),
        }
    }
}

/// Everything discovered at startup: the render theme plus optional
/// audio file paths, looked up by convention name.
#[derive(Debug, Clone)]
pub struct Assets {
    pub theme: Theme,
    /// Looping background music, if present
    pub music: Option<PathBuf>,
    /// One-shot game-over cue, if present
    pub game_over: Option<PathBuf>,
}

impl Assets {
    /// Best-effort load from a directory. Never fails.
    pub fn load(dir: &Path) -> Self {
        let theme = load_theme(&dir.join("theme.json"));
        let music = find_audio(dir, "background_music");
        let game_over = find_audio(dir, "game_over");

        if music.is_none() {
            log::info!("no background music found, running silent");
        }
        if game_over.is_none() {
            log::info!("no game-over sound found");
        }

        Self {
            theme,
            music,
            game_over,
        }
    }
}

fn load_theme(path: &Path) -> Theme {
    match fs::read_to_string(path) {
        Ok(json) => match serde_json::from_str(&json) {
            Ok(theme) => {
                log::info!("loaded theme from {}", path.display());
                theme
            }
            Err(e) => {
                log::warn!("ignoring malformed theme {}: {}", path.display(), e);
                Theme::default()
            }
        },
        Err(_) => Theme::default(),
    }
}

/// Probe `<dir>/<stem>.<ext>` for each known audio extension
fn find_audio(dir: &Path, stem: &str) -> Option<PathBuf> {
    AUDIO_EXTENSIONS.iter().find_map(|ext| {
        let path = dir.join(format!("{stem}.{ext}"));
        if path.is_file() {
            log::info!("found audio asset {}", path.display());
            Some(path)
        } else {
            None
        }
    })
}
