//! Render snapshot
//!
//! Everything an external renderer needs to draw a frame, flattened into
//! GPU-friendly instances plus a small HUD record.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::sim::{Bonus, Bullet, GamePhase, GameState, Owner};

/// Instance flag bits
pub mod flags {
    pub const PLAYER: u32 = 1 << 0;
    pub const ENEMY: u32 = 1 << 1;
    pub const BULLET: u32 = 1 << 2;
    /// Spawned under a size bonus
    pub const SCALED: u32 = 1 << 3;
    /// Player is invulnerable and should blink
    pub const BLINKING: u32 = 1 << 4;
}

/// One drawable circle
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Instance {
    pub position: [f32; 2],
    pub velocity: [f32; 2],
    pub radius: f32,
    pub flags: u32,
}

impl Instance {
    fn from_bullet(bullet: &Bullet) -> Self {
        let mut flags = flags::BULLET;
        flags |= match bullet.owner {
            Owner::Player => flags::PLAYER,
            Owner::Enemy => flags::ENEMY,
        };
        if bullet.scaled {
            flags |= flags::SCALED;
        }
        Self {
            position: bullet.body.pos.to_array(),
            velocity: bullet.body.vel.to_array(),
            radius: bullet.radius,
            flags,
        }
    }
}

/// Heads-up display values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    pub lives: u32,
    pub score: u64,
    pub level: u32,
    pub enemy_health: f32,
    pub phase: GamePhase,
    pub active_bonuses: Vec<Bonus>,
    pub offered_bonuses: Option<[Bonus; 2]>,
}

/// A frame's worth of render data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Player first, enemy second, then bullets
    pub instances: Vec<Instance>,
    pub hud: Hud,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let mut instances = Vec::with_capacity(state.bullets.len() + 2);

        let player = &state.player;
        let mut player_flags = flags::PLAYER;
        if player.blinking {
            player_flags |= flags::BLINKING;
        }
        instances.push(Instance {
            position: player.body.pos.to_array(),
            velocity: player.body.vel.to_array(),
            radius: state.tuning.player_sprite_radius,
            flags: player_flags,
        });

        let enemy = &state.enemy;
        let mut enemy_flags = flags::ENEMY;
        if enemy.radius != state.tuning.enemy_radius {
            enemy_flags |= flags::SCALED;
        }
        instances.push(Instance {
            position: enemy.body.pos.to_array(),
            velocity: enemy.body.vel.to_array(),
            radius: enemy.radius,
            flags: enemy_flags,
        });

        instances.extend(state.bullets.iter().map(Instance::from_bullet));

        Self {
            instances,
            hud: Hud::capture(state),
        }
    }

    /// Raw instance buffer for upload
    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Instance buffer as packed floats (flags reinterpreted bitwise)
    pub fn instance_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Hud {
    pub fn capture(state: &GameState) -> Self {
        Self {
            lives: state.player.lives,
            score: state.player.score,
            level: state.enemy.level,
            enemy_health: state.enemy.health_fraction(),
            phase: state.phase,
            active_bonuses: state.bonuses.active().collect(),
            offered_bonuses: state.offered,
        }
    }
}

impl GameState {
    /// Capture render data for the current frame
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use glam::Vec2;

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<Instance>(), 24);
    }

    #[test]
    fn test_snapshot_tags_owners() {
        let mut state = GameState::new(8, Tuning::default());
        state.apply_bonus(Bonus::HeavyShots);
        state.bullets.spawn(Owner::Player, Vec2::new(1.0, 2.0), Vec2::ZERO, Vec2::ZERO, 4.0, 2.0);
        state.bullets.spawn(Owner::Enemy, Vec2::new(3.0, 4.0), Vec2::new(0.0, 5.0), Vec2::ZERO, 6.0, 1.0);

        let snap = state.snapshot();
        assert_eq!(snap.instances.len(), 4);
        assert_ne!(snap.instances[0].flags & flags::PLAYER, 0);
        assert_ne!(snap.instances[1].flags & flags::ENEMY, 0);

        let shot = snap.instances[2];
        assert_eq!(shot.flags, flags::BULLET | flags::PLAYER | flags::SCALED);
        assert_eq!(shot.radius, 8.0);

        let enemy_shot = snap.instances[3];
        assert_eq!(enemy_shot.flags, flags::BULLET | flags::ENEMY);
        assert_eq!(enemy_shot.velocity, [0.0, 5.0]);

        assert_eq!(snap.instance_bytes().len(), 4 * 24);
        assert_eq!(snap.instance_floats().len(), 4 * 6);
    }

    #[test]
    fn test_hud() {
        let mut state = GameState::new(8, Tuning::default());
        state.enemy.health = state.enemy.max_health / 2;
        let hud = state.snapshot().hud;
        assert_eq!(hud.lives, state.tuning.starting_lives);
        assert_eq!(hud.phase, GamePhase::Play);
        assert!((hud.enemy_health - 0.5).abs() < 0.05);
        assert!(hud.active_bonuses.is_empty());

        let json = serde_json::to_string(&hud).unwrap();
        assert!(json.contains("\"phase\":\"Play\""));
    }
}
