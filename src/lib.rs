//! Bridge Runner - a side-scrolling endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `render`: Terminal rendering
//! - `assets`: Optional theme/audio discovery with graceful fallback
//! - `audio`: Background music and one-shot sound cues
//! - `settings`: User preferences
//! - `highscores`: Best-distance leaderboard

pub mod assets;
pub mod audio;
pub mod highscores;
pub mod render;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// World width in pixels
    pub const SCREEN_WIDTH: f32 = 800.0;
    /// World height in pixels
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Simulation ticks per second (one tick per rendered frame)
    pub const TICK_RATE: u32 = 60;

    /// Downward acceleration, pixels/tick²
    pub const GRAVITY: f32 = 1.0;
    /// Maximum downward speed gravity can produce, pixels/tick
    pub const TERMINAL_VELOCITY: f32 = 25.0;
    /// Jump impulse, pixels/tick (negative is up)
    pub const JUMP_STRENGTH: f32 = -20.0;
    /// Leftward bridge scroll speed, pixels/tick
    pub const SCROLL_SPEED: f32 = 7.0;

    /// Player bounding box side length
    pub const PLAYER_SIZE: f32 = 60.0;
    /// Fixed horizontal player position
    pub const PLAYER_START_X: f32 = 150.0;
    /// Vertical player position at spawn
    pub const PLAYER_START_Y: f32 = 300.0;
    /// Forward lean while running, degrees (cosmetic)
    pub const PLAYER_RUN_TILT: f32 = 5.0;

    /// Bridge segment width
    pub const BRIDGE_WIDTH: f32 = 120.0;
    /// Bridge segment height
    pub const BRIDGE_HEIGHT: f32 = 40.0;
    /// Fixed track height for all bridge segments
    pub const BRIDGE_Y: f32 = 460.0;
    /// Segments in the initial contiguous run
    pub const INITIAL_BRIDGES: usize = 10;

    /// Spawn margin past the right screen edge
    pub const SPAWN_LOOKAHEAD: f32 = 200.0;
    /// Probability of a big gap once past the warm-up score
    pub const BIG_GAP_CHANCE: f32 = 0.25;
    /// Big gap size range, pixels (traversable by the fixed jump arc;
    /// re-derive if the physics constants change)
    pub const BIG_GAP_MIN: i32 = 130;
    pub const BIG_GAP_MAX: i32 = 220;
    /// Score above which big gaps may appear
    pub const BIG_GAP_SCORE: u32 = 150;
    /// Score above which contiguous segments get a small jitter
    pub const JITTER_SCORE: u32 = 100;
    /// Maximum contiguous jitter, pixels
    pub const JITTER_MAX: i32 = 15;

    /// Height of the fire strip along the bottom edge (cosmetic)
    pub const FIRE_HEIGHT: f32 = 50.0;
}
