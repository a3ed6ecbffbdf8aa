//! Collision predicates for circular hitboxes
//!
//! Bullets against the enemy use circle-vs-circle. Bullets against the player
//! use the bullet's center as a point inside the player's (small) hitbox.
//! The two tests are deliberately different: a graze near the player is
//! survivable, while shots at the big enemy register on contact.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::vector::distance;

/// Do two circles touch or overlap?
#[inline]
pub fn circles_overlap(center_a: Vec2, radius_a: f32, center_b: Vec2, radius_b: f32) -> bool {
    distance(center_a, center_b) <= radius_a + radius_b
}

/// Is a point inside (or on the edge of) a circle?
#[inline]
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    distance(point, center) <= radius
}

/// Axis-aligned rectangle (origin top-left, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Inclusive containment test
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Nearest in-bounds point, each axis clamped independently
    #[inline]
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max)
    }
}
