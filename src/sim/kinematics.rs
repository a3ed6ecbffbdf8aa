//! Position/velocity/acceleration integration

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Kinematic state of anything that moves
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, acc: Vec2) -> Self {
        Self { pos, vel, acc }
    }

    /// Advance by `dt` seconds.
    ///
    /// Position moves with the velocity from *before* this step, then the
    /// velocity picks up acceleration. Curving bullet patterns depend on this
    /// order, so keep it.
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.vel += self.acc * dt;
    }
}
