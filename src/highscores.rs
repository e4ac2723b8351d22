//! High score leaderboard system
//!
//! Persisted to `highscores.json`, tracks the top 10 distances.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Distance covered, meters
    pub distance_m: u32,
    /// Run seed, so a record run can be replayed
    pub seed: u64,
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    const FILE_NAME: &'static str = "highscores.json";

    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a distance qualifies for the leaderboard
    pub fn qualifies(&self, distance_m: u32) -> bool {
        if distance_m == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries
            .last()
            .map(|e| distance_m > e.distance_m)
            .unwrap_or(true)
    }

    /// Add a finished run (if it qualifies).
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify.
    pub fn add_distance(&mut self, distance_m: u32, seed: u64) -> Option<usize> {
        if !self.qualifies(distance_m) {
            return None;
        }

        let entry = HighScoreEntry { distance_m, seed };

        // Insertion point, sorted descending by distance
        let pos = self.entries.iter().position(|e| distance_m > e.distance_m);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best distance so far (if any)
    pub fn best(&self) -> Option<u32> {
        self.entries.first().map(|e| e.distance_m)
    }

    /// Load from the working directory; empty leaderboard when absent
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<HighScores>(&json) {
                Ok(scores) => {
                    log::info!("loaded {} high scores", scores.entries.len());
                    scores
                }
                Err(e) => {
                    log::warn!("ignoring malformed {}: {}", path.display(), e);
                    Self::new()
                }
            },
            Err(_) => {
                log::info!("no high scores found, starting fresh");
                Self::new()
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
                    log::warn!("could not save high scores to {}: {}", path.display(), e);
                }
            }
            Err(e) => log::warn!("could not serialize high scores: {}", e),
        }
    }
}
