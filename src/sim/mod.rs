//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per rendered frame)
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, landing_contact};
pub use spawn::{initial_bridges, scroll_bridges, spawn_bridges};
pub use state::{Bridge, GameEvent, GamePhase, GameState, Player};
pub use tick::{TickInput, tick};
