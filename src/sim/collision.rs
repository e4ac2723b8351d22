//! Axis-aligned collision tests between the player and bridge segments
//!
//! The original engine-provided sprite intersection is replaced with an
//! explicit AABB overlap plus a landing-from-above qualifier.

use glam::Vec2;

/// An axis-aligned bounding box in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Build from a top-left corner and a size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    /// Strict overlap: boxes that merely touch along an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// A landing-from-above contact: the player is moving downward, overlaps the
/// bridge, its bottom edge is at or below the bridge top, and its top edge is
/// still above the bridge top. Side and underside overlaps never qualify.
pub fn landing_contact(player: &Aabb, vel_y: f32, bridge: &Aabb) -> bool {
    vel_y > 0.0
        && player.overlaps(bridge)
        && player.bottom() >= bridge.top()
        && player.top() < bridge.top()
}
