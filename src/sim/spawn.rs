//! Bridge spawning, scrolling, and despawning
//!
//! The spawner extends the track to the right, one segment per tick at most,
//! with score-gated randomness: flush segments during the warm-up, small
//! jitter past score 100, occasional jumpable gaps past score 150.

use rand::Rng;

use super::state::{Bridge, GameState};
use crate::consts::*;

/// The starting track: a contiguous run of flush segments from the left edge
pub fn initial_bridges() -> Vec<Bridge> {
    (0..INITIAL_BRIDGES)
        .map(|i| Bridge::new(i as f32 * BRIDGE_WIDTH, BRIDGE_Y))
        .collect()
}

/// Spawn at most one segment this tick, positioned relative to the rightmost
/// segment's right edge once that edge comes within the lookahead margin.
pub fn spawn_bridges(state: &mut GameState) {
    let Some(rightmost) = state.bridges.iter().map(|b| b.right()).reduce(f32::max) else {
        // Recovery fallback; should not occur in normal play
        log::warn!("bridge set empty, respawning at the right edge");
        state.bridges.push(Bridge::new(SCREEN_WIDTH, BRIDGE_Y));
        return;
    };

    if rightmost >= SCREEN_WIDTH + SPAWN_LOOKAHEAD {
        return;
    }

    let x = if state.score > BIG_GAP_SCORE && state.rng.random::<f32>() < BIG_GAP_CHANCE {
        rightmost + state.rng.random_range(BIG_GAP_MIN..=BIG_GAP_MAX) as f32
    } else if state.score > JITTER_SCORE {
        rightmost + state.rng.random_range(0..=JITTER_MAX) as f32
    } else {
        rightmost
    };
    state.bridges.push(Bridge::new(x, BRIDGE_Y));
}

/// Scroll every segment left; a segment is removed iff its right edge < 0
pub fn scroll_bridges(state: &mut GameState) {
    for bridge in &mut state.bridges {
        bridge.pos.x -= SCROLL_SPEED;
    }
    state.bridges.retain(|b| b.right() >= 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout_is_flush() {
        let bridges = initial_bridges();
        assert_eq!(bridges.len(), INITIAL_BRIDGES);
        for pair in bridges.windows(2) {
            assert_eq!(pair[1].pos.x, pair[0].right());
        }
    }

    #[test]
    fn test_spawn_only_inside_lookahead() {
        let mut state = GameState::new(1);
        // Rightmost edge of the initial run is at 1200, past 800 + 200
        spawn_bridges(&mut state);
        assert_eq!(state.bridges.len(), INITIAL_BRIDGES);

        // Pull the track back until the edge is inside the margin
        for bridge in &mut state.bridges {
            bridge.pos.x -= 300.0;
        }
        spawn_bridges(&mut state);
        assert_eq!(state.bridges.len(), INITIAL_BRIDGES + 1);
    }

    #[test]
    fn test_warmup_spawns_are_flush() {
        let mut state = GameState::new(2);
        state.score = JITTER_SCORE; // gate is strictly greater-than
        for bridge in &mut state.bridges {
            bridge.pos.x -= 300.0;
        }
        let edge = state.bridges.iter().map(|b| b.right()).reduce(f32::max).unwrap();
        spawn_bridges(&mut state);
        assert_eq!(state.bridges.last().unwrap().pos.x, edge);
    }

    #[test]
    fn test_jitter_band_before_big_gap_score() {
        // Between the gates only the 0..=15 jitter applies, across any seed
        for seed in 0..50 {
            let mut state = GameState::new(seed);
            state.score = BIG_GAP_SCORE;
            for bridge in &mut state.bridges {
                bridge.pos.x -= 300.0;
            }
            let edge = state.bridges.iter().map(|b| b.right()).reduce(f32::max).unwrap();
            spawn_bridges(&mut state);
            let offset = state.bridges.last().unwrap().pos.x - edge;
            assert!((0.0..=JITTER_MAX as f32).contains(&offset));
        }
    }

    #[test]
    fn test_big_gap_reachable_past_gate() {
        // At score 151 the big-gap branch must fire for some seed and,
        // when it does, stay within the jumpable bounds
        let mut saw_big_gap = false;
        for seed in 0..200 {
            let mut state = GameState::new(seed);
            state.score = BIG_GAP_SCORE + 1;
            for bridge in &mut state.bridges {
                bridge.pos.x -= 300.0;
            }
            let edge = state.bridges.iter().map(|b| b.right()).reduce(f32::max).unwrap();
            spawn_bridges(&mut state);
            let offset = state.bridges.last().unwrap().pos.x - edge;
            if offset > JITTER_MAX as f32 {
                saw_big_gap = true;
                assert!((BIG_GAP_MIN as f32..=BIG_GAP_MAX as f32).contains(&offset));
            }
        }
        assert!(saw_big_gap);
    }

    #[test]
    fn test_despawn_exactly_at_left_edge() {
        let mut state = GameState::new(3);
        state.bridges = vec![
            // Right edge lands exactly on 0 after one scroll step: kept
            Bridge::new(SCROLL_SPEED - BRIDGE_WIDTH, BRIDGE_Y),
            // Right edge ends below 0: removed
            Bridge::new(SCROLL_SPEED - BRIDGE_WIDTH - 1.0, BRIDGE_Y),
            Bridge::new(400.0, BRIDGE_Y),
        ];
        scroll_bridges(&mut state);
        assert_eq!(state.bridges.len(), 2);
        assert_eq!(state.bridges[0].right(), 0.0);
        assert_eq!(state.bridges[1].pos.x, 400.0 - SCROLL_SPEED);
    }

    #[test]
    fn test_empty_set_recovery() {
        let mut state = GameState::new(4);
        state.bridges.clear();
        spawn_bridges(&mut state);
        assert_eq!(state.bridges.len(), 1);
        assert_eq!(state.bridges[0].pos.x, SCREEN_WIDTH);
    }
}
