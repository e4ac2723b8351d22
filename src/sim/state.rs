//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::{Aabb, landing_contact};
use super::spawn::initial_bridges;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended; waiting for restart input
    GameOver,
}

/// One-shot events emitted by the simulation for the frontend to react to
/// (sound cues, overlay updates). Drained once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Player left the ground
    Jumped,
    /// Player landed on a bridge segment
    Landed,
    /// Player fell off the bottom of the screen
    GameOver,
    /// A new run started from the game-over screen
    Restarted,
}

/// The runner. Position is the top-left corner of its bounding box;
/// only `pos.y` changes during play.
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    /// Vertical velocity, pixels/tick (positive is down)
    pub vel_y: f32,
    /// True from jump initiation until landing
    pub jumping: bool,
    /// True when the most recent tick resolved a landing
    pub on_ground: bool,
    /// Visual tilt in degrees, derived from motion state each tick.
    /// Cosmetic only; never feeds back into collision geometry.
    pub tilt: f32,
    animation_timer: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            vel_y: 0.0,
            jumping: false,
            on_ground: false,
            tilt: 0.0,
            animation_timer: 0,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::splat(PLAYER_SIZE))
    }

    /// Initiate a jump. Only effective from the ground; returns whether
    /// the impulse was applied.
    pub fn jump(&mut self) -> bool {
        if !self.on_ground {
            return false;
        }
        self.vel_y = JUMP_STRENGTH;
        self.jumping = true;
        self.on_ground = false;
        true
    }

    /// Advance one physics tick against the current bridge set.
    /// Returns true if a landing was resolved this tick.
    ///
    /// Collision is discrete, not swept: a fall fast enough to cross a
    /// segment's thickness within one tick passes through. Terminal
    /// velocity (25) is below the segment height (40), so this cannot
    /// happen on the fixed track.
    pub fn update(&mut self, bridges: &[Bridge]) -> bool {
        self.vel_y += GRAVITY;
        if self.vel_y > TERMINAL_VELOCITY {
            self.vel_y = TERMINAL_VELOCITY;
        }
        self.pos.y += self.vel_y;

        self.animation_timer += 1;
        self.tilt = self.current_tilt();

        // First qualifying landing wins; at most one resolved per tick.
        self.on_ground = false;
        for bridge in bridges {
            if landing_contact(&self.aabb(), self.vel_y, &bridge.aabb()) {
                self.pos.y = bridge.top() - PLAYER_SIZE;
                self.vel_y = 0.0;
                self.jumping = false;
                self.on_ground = true;
                return true;
            }
        }
        false
    }

    /// Pure function of motion state. Uses last tick's `on_ground`,
    /// matching the animate-then-collide order of the update.
    fn current_tilt(&self) -> f32 {
        if self.on_ground && !self.jumping {
            // Forward lean while running, with a slight bob
            -(PLAYER_RUN_TILT + 2.0 * (self.animation_timer % 10) as f32 / 10.0)
        } else if self.jumping && self.vel_y < 0.0 {
            // Lean back during ascent
            10.0
        } else {
            // Forward tilt during fall, capped
            -(self.vel_y.abs() * 0.8).min(15.0)
        }
    }
}

/// A bridge segment: fixed-size, scrolls left, removed once fully off-screen.
#[derive(Debug, Clone, Copy)]
pub struct Bridge {
    /// Top-left corner; `y` stays at the track height
    pub pos: Vec2,
}

impl Bridge {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn right(&self) -> f32 {
        self.pos.x + BRIDGE_WIDTH
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::new(BRIDGE_WIDTH, BRIDGE_HEIGHT))
    }
}

/// Complete game state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    /// Increments once per tick while running; shown as score/10 meters
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub bridges: Vec<Bridge>,
    /// Events emitted since the frontend last drained them
    pub events: Vec<GameEvent>,
    /// Spawner RNG; owned by the state so runs are reproducible by seed
    pub rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Running,
            score: 0,
            time_ticks: 0,
            player: Player::new(),
            bridges: initial_bridges(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Full reset for a restart: fresh player, the initial contiguous
    /// bridge run, score 0. The RNG keeps its stream so consecutive runs
    /// in one session differ.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Running;
        self.score = 0;
        self.player = Player::new();
        self.bridges = initial_bridges();
        self.events.clear();
    }

    /// Distance covered, in implied meters
    pub fn distance_m(&self) -> u32 {
        self.score / 10
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_requires_ground() {
        let mut player = Player::new();
        assert!(!player.on_ground);

        // Airborne jump request leaves state unchanged
        let before = player.clone();
        assert!(!player.jump());
        assert_eq!(player.vel_y, before.vel_y);
        assert_eq!(player.jumping, before.jumping);

        player.on_ground = true;
        assert!(player.jump());
        assert_eq!(player.vel_y, JUMP_STRENGTH);
        assert!(player.jumping);
        assert!(!player.on_ground);

        // No double jump
        assert!(!player.jump());
        assert_eq!(player.vel_y, JUMP_STRENGTH);
    }

    #[test]
    fn test_gravity_single_tick() {
        // Player at start height, no bridge below it yet
        let mut player = Player::new();
        player.update(&[]);
        assert_eq!(player.vel_y, 1.0);
        assert_eq!(player.pos.y, PLAYER_START_Y + 1.0);
    }

    #[test]
    fn test_landing_snaps_to_bridge_top() {
        let mut player = Player::new();
        let bridges = initial_bridges();

        let landed = (0..120).any(|_| player.update(&bridges));
        assert!(landed);
        assert_eq!(player.pos.y, BRIDGE_Y - PLAYER_SIZE);
        assert_eq!(player.vel_y, 0.0);
        assert!(player.on_ground);
        assert!(!player.jumping);
    }

    #[test]
    fn test_resting_player_stays_snapped() {
        let mut player = Player::new();
        let bridges = initial_bridges();
        while !player.update(&bridges) {}

        // Each subsequent tick penetrates by one gravity step, then re-snaps
        for _ in 0..10 {
            assert!(player.update(&bridges));
            assert_eq!(player.pos.y, BRIDGE_Y - PLAYER_SIZE);
            assert_eq!(player.vel_y, 0.0);
        }
    }

    #[test]
    fn test_tilt_tracks_motion_state() {
        let mut player = Player::new();
        let bridges = initial_bridges();
        while !player.update(&bridges) {}

        // Running: forward lean
        player.update(&bridges);
        assert!(player.tilt <= -PLAYER_RUN_TILT);

        // Ascent: lean back
        player.jump();
        player.update(&bridges);
        assert_eq!(player.tilt, 10.0);

        // Fast fall: forward tilt capped at 15 degrees
        let mut faller = Player::new();
        for _ in 0..40 {
            faller.update(&[]);
        }
        assert_eq!(faller.tilt, -15.0);
    }

    #[test]
    fn test_reset_restores_initial_layout() {
        let mut state = GameState::new(7);
        state.score = 412;
        state.phase = GamePhase::GameOver;
        state.player.pos.y = 900.0;
        state.bridges.clear();

        state.reset();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.player.pos, Vec2::new(PLAYER_START_X, PLAYER_START_Y));
        assert_eq!(state.bridges.len(), INITIAL_BRIDGES);
        for (i, bridge) in state.bridges.iter().enumerate() {
            assert_eq!(bridge.pos.x, i as f32 * BRIDGE_WIDTH);
            assert_eq!(bridge.pos.y, BRIDGE_Y);
        }
    }
}
