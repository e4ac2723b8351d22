//! Fixed timestep simulation tick
//!
//! One call advances the game by exactly one tick. The frontend drains
//! input events into a `TickInput` before each call, so a jump or restart
//! registered during a frame applies within that same tick.

use super::spawn::{scroll_bridges, spawn_bridges};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::SCREEN_HEIGHT;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump request; a no-op while airborne or in game over
    pub jump: bool,
    /// Restart request; a no-op unless in game over
    pub restart: bool,
}

/// Advance the game state by one tick.
///
/// Per-tick order while running: jump input → score → spawner → scroll →
/// player physics/collision → game-over check. While in game over the
/// simulation is frozen and only the restart input is processed.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        if input.restart {
            state.reset();
            state.events.push(GameEvent::Restarted);
            log::info!("restarting run (seed {})", state.seed);
        }
        return;
    }

    if input.jump && state.player.jump() {
        state.events.push(GameEvent::Jumped);
    }

    state.score += 1;
    state.time_ticks += 1;

    spawn_bridges(state);
    scroll_bridges(state);

    // A resting player re-snaps every tick; only a touchdown from the air
    // counts as a landing event.
    let was_airborne = !state.player.on_ground;
    if state.player.update(&state.bridges) && was_airborne {
        state.events.push(GameEvent::Landed);
    }

    // Fell through a gap. The transition fires once; subsequent ticks
    // return early above, so the cue cannot re-trigger.
    if state.player.pos.y > SCREEN_HEIGHT {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver);
        log::info!("game over at {}m", state.distance_m());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_tick_applies_gravity_only() {
        let mut state = GameState::new(42);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 1);
        assert_eq!(state.player.vel_y, 1.0);
        assert_eq!(state.player.pos.y, PLAYER_START_Y + 1.0);
    }

    #[test]
    fn test_score_increments_while_running() {
        let mut state = GameState::new(42);
        for _ in 0..5 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.score, 5);
        assert_eq!(state.time_ticks, 5);
    }

    #[test]
    fn test_game_over_fires_exactly_once() {
        let mut state = GameState::new(42);
        // Strip the track so the player free-falls through the screen
        state.bridges.clear();

        let mut game_over_events = 0;
        for _ in 0..200 {
            tick(&mut state, &TickInput::default());
            game_over_events += state
                .events
                .drain(..)
                .filter(|e| *e == GameEvent::GameOver)
                .count();
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(game_over_events, 1);
    }

    #[test]
    fn test_simulation_frozen_while_game_over() {
        let mut state = GameState::new(42);
        state.bridges.clear();
        while state.phase != GamePhase::GameOver {
            tick(&mut state, &TickInput::default());
        }

        let score = state.score;
        let ticks = state.time_ticks;
        let player_y = state.player.pos.y;
        for _ in 0..30 {
            // Jump input must be ignored too
            tick(&mut state, &TickInput { jump: true, restart: false });
        }
        assert_eq!(state.score, score);
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.player.pos.y, player_y);
    }

    #[test]
    fn test_restart_resets_run() {
        let mut state = GameState::new(42);
        state.bridges.clear();
        while state.phase != GamePhase::GameOver {
            tick(&mut state, &TickInput::default());
        }
        state.events.clear();

        tick(&mut state, &TickInput { jump: false, restart: true });
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.player.pos.x, PLAYER_START_X);
        assert_eq!(state.player.pos.y, PLAYER_START_Y);
        assert_eq!(state.bridges.len(), INITIAL_BRIDGES);
        assert!(state.events.contains(&GameEvent::Restarted));
    }

    #[test]
    fn test_jump_from_rest_emits_event() {
        let mut state = GameState::new(42);
        // Settle onto the initial track first
        for _ in 0..60 {
            tick(&mut state, &TickInput::default());
        }
        assert!(state.player.on_ground);
        state.events.clear();

        tick(&mut state, &TickInput { jump: true, restart: false });
        assert!(state.events.contains(&GameEvent::Jumped));
        assert!(state.player.jumping);
        assert!(state.player.vel_y < 0.0);
    }

    #[test]
    fn test_determinism() {
        // Two states with the same seed and inputs stay identical
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        for i in 0..600u32 {
            let input = TickInput {
                jump: i % 37 == 0,
                restart: false,
            };
            tick(&mut state1, &input);
            tick(&mut state2, &input);
        }

        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.phase, state2.phase);
        assert_eq!(state1.player.pos, state2.player.pos);
        assert_eq!(state1.bridges.len(), state2.bridges.len());
        for (a, b) in state1.bridges.iter().zip(&state2.bridges) {
            assert_eq!(a.pos, b.pos);
        }
    }

    proptest! {
        #[test]
        fn prop_physics_invariants(seed: u64, jumps in prop::collection::vec(any::<bool>(), 1..400)) {
            let mut state = GameState::new(seed);
            for jump in jumps {
                tick(&mut state, &TickInput { jump, restart: false });
                prop_assert!(state.player.vel_y <= TERMINAL_VELOCITY);
                prop_assert!(!(state.player.on_ground && state.player.jumping));
                for bridge in &state.bridges {
                    prop_assert!(bridge.right() >= 0.0);
                }
            }
        }
    }
}
