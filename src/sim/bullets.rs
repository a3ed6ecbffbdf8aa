//! Bullet pool
//!
//! Player-owned and enemy-owned bullets live in separate collections, so a
//! bullet can only ever be tested against the opposing side.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, circles_overlap, point_in_circle};
use super::enemy::Enemy;
use super::kinematics::Body;
use super::player::{DamageOutcome, Player};
use super::state::GameEvent;
use crate::tuning::Tuning;

/// Who fired a bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    Player,
    Enemy,
}

/// Stable bullet identifier
pub type BulletId = u32;

/// A projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: BulletId,
    pub owner: Owner,
    pub body: Body,
    pub radius: f32,
    /// Spawned while a size bonus was active
    pub scaled: bool,
}

impl Bullet {
    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }
}

/// Outcome of stepping the pool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Bullets removed for leaving the play area
    pub left_arena: usize,
    /// Player bullets that hit the enemy
    pub enemy_hits: usize,
    /// Enemy bullets that hit the player
    pub player_hits: usize,
}

impl StepReport {
    pub fn removed(&self) -> usize {
        self.left_arena + self.enemy_hits + self.player_hits
    }
}

/// All live bullets
#[derive(Debug, Clone, Default)]
pub struct BulletPool {
    player: Vec<Bullet>,
    enemy: Vec<Bullet>,
    next_id: BulletId,
}

impl BulletPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a bullet. `scale` multiplies the base radius and is fixed for
    /// the bullet's lifetime.
    pub fn spawn(
        &mut self,
        owner: Owner,
        pos: Vec2,
        vel: Vec2,
        acc: Vec2,
        radius: f32,
        scale: f32,
    ) -> BulletId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        let bullet = Bullet {
            id,
            owner,
            body: Body::new(pos, vel, acc),
            radius: radius * scale,
            scaled: scale != 1.0,
        };
        match owner {
            Owner::Player => self.player.push(bullet),
            Owner::Enemy => self.enemy.push(bullet),
        }
        id
    }

    pub fn player_bullets(&self) -> &[Bullet] {
        &self.player
    }

    pub fn enemy_bullets(&self) -> &[Bullet] {
        &self.enemy
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bullet> {
        self.player.iter().chain(self.enemy.iter())
    }

    pub fn len(&self) -> usize {
        self.player.len() + self.enemy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.player.is_empty() && self.enemy.is_empty()
    }

    pub fn clear(&mut self) {
        self.player.clear();
        self.enemy.clear();
    }

    /// Integrate every bullet, drop the ones that left the play area, and
    /// resolve hits against the opposing side.
    ///
    /// Removal happens in place with `retain_mut`, which visits each bullet
    /// exactly once in order.
    pub fn step_all(
        &mut self,
        dt: f32,
        arena: Rect,
        player: &mut Player,
        enemy: &mut Enemy,
        tuning: &Tuning,
        events: &mut Vec<GameEvent>,
    ) -> StepReport {
        let mut report = StepReport::default();

        self.player.retain_mut(|bullet| {
            bullet.body.integrate(dt);
            if !arena.contains(bullet.body.pos) {
                report.left_arena += 1;
                return false;
            }
            if enemy.is_alive()
                && circles_overlap(bullet.body.pos, bullet.radius, enemy.body.pos, enemy.radius)
            {
                enemy.take_hit();
                player.score += tuning.score_per_hit;
                events.push(GameEvent::EnemyHit {
                    remaining: enemy.health,
                });
                report.enemy_hits += 1;
                return false;
            }
            true
        });

        self.enemy.retain_mut(|bullet| {
            bullet.body.integrate(dt);
            if !arena.contains(bullet.body.pos) {
                report.left_arena += 1;
                return false;
            }
            if point_in_circle(bullet.body.pos, player.body.pos, player.hitbox_radius) {
                match player.take_damage(tuning) {
                    DamageOutcome::Ignored => return true,
                    DamageOutcome::Respawned | DamageOutcome::Defeated => {
                        events.push(GameEvent::PlayerHit {
                            lives_left: player.lives,
                        });
                        report.player_hits += 1;
                        return false;
                    }
                }
            }
            true
        });

        report
    }
}
