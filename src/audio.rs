//! Audio playback via rodio
//!
//! Optional looping background music plus one-shot cues driven by drained
//! simulation events. A missing output device or missing files means
//! silence, never an error surfaced to the player.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use crate::assets::Assets;
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Audio manager for the game
pub struct AudioManager {
    // Dropping the stream kills all playback; keep it for our lifetime
    _stream: Option<OutputStream>,
    handle: Option<OutputStreamHandle>,
    /// Background music sink, kept alive while the game runs
    _music: Option<Sink>,
    game_over_path: Option<PathBuf>,
    sfx_volume: f32,
}

impl AudioManager {
    pub fn new(assets: &Assets, settings: &Settings) -> Self {
        let (stream, handle) = match OutputStream::try_default() {
            Ok(pair) => pair,
            Err(e) => {
                log::warn!("no audio output device, audio disabled: {}", e);
                return Self {
                    _stream: None,
                    handle: None,
                    _music: None,
                    game_over_path: None,
                    sfx_volume: 0.0,
                };
            }
        };

        let music = assets
            .music
            .as_deref()
            .and_then(|path| start_music(&handle, path, settings.effective_music_volume()));

        Self {
            _stream: Some(stream),
            handle: Some(handle),
            _music: music,
            game_over_path: assets.game_over.clone(),
            sfx_volume: settings.effective_sfx_volume(),
        }
    }

    /// React to one drained simulation event. The game-over cue fires once
    /// per drained event, and the sim emits that event once per game over.
    pub fn handle_event(&self, event: GameEvent) {
        match event {
            GameEvent::GameOver => self.play_game_over(),
            GameEvent::Jumped | GameEvent::Landed | GameEvent::Restarted => {}
        }
    }

    fn play_game_over(&self) {
        let (Some(handle), Some(path)) = (&self.handle, &self.game_over_path) else {
            return;
        };
        let Some(source) = open_source(path) else {
            return;
        };
        match Sink::try_new(handle) {
            Ok(sink) => {
                sink.set_volume(self.sfx_volume);
                sink.append(source);
                sink.detach();
            }
            Err(e) => log::warn!("could not play game-over cue: {}", e),
        }
    }
}

fn open_source(path: &Path) -> Option<Decoder<BufReader<File>>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            log::warn!("could not open {}: {}", path.display(), e);
            return None;
        }
    };
    match Decoder::new(BufReader::new(file)) {
        Ok(source) => Some(source),
        Err(e) => {
            log::warn!("could not decode {}: {}", path.display(), e);
            None
        }
    }
}

fn start_music(handle: &OutputStreamHandle, path: &Path, volume: f32) -> Option<Sink> {
    let source = open_source(path)?;
    match Sink::try_new(handle) {
        Ok(sink) => {
            sink.set_volume(volume);
            sink.append(source.repeat_infinite());
            log::info!("background music playing from {}", path.display());
            Some(sink)
        }
        Err(e) => {
            log::warn!("could not start background music: {}", e);
            None
        }
    }
}
