//! Player controller: movement, auto-fire, lives and invulnerability

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bullets::{BulletPool, Owner};
use super::input::InputState;
use super::kinematics::Body;
use super::vector::normalized;
use crate::consts::{PLAYER_FAN_SIZE, PLAYER_FAN_SPREAD};
use crate::tuning::Tuning;

/// What a hit did to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Invulnerable (or already out of lives), nothing happened
    Ignored,
    /// Lost a life and went back to the spawn point
    Respawned,
    /// Lost the last life
    Defeated,
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub lives: u32,
    pub score: u64,
    /// Seconds of invulnerability left
    pub invulnerable: f32,
    /// Render hint, true while invulnerable
    pub blinking: bool,
    /// Seconds until the next volley
    pub shoot_cooldown: f32,
    pub hitbox_radius: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            body: Body::new(tuning.player_spawn(), Vec2::ZERO, Vec2::ZERO),
            lives: tuning.starting_lives,
            score: 0,
            invulnerable: 0.0,
            blinking: false,
            shoot_cooldown: 0.0,
            hitbox_radius: tuning.player_hitbox_radius,
        }
    }

    /// Per-round reset. Lives and score carry over.
    pub fn reset_for_round(&mut self, tuning: &Tuning, hitbox_scale: f32) {
        self.body = Body::new(tuning.player_spawn(), Vec2::ZERO, Vec2::ZERO);
        self.invulnerable = 0.0;
        self.blinking = false;
        self.shoot_cooldown = 0.0;
        self.hitbox_radius = tuning.player_hitbox_radius * hitbox_scale;
    }

    #[inline]
    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable > 0.0
    }

    /// Move, count down timers and fire. Returns true if a volley went out.
    pub fn update(
        &mut self,
        dt: f32,
        input: &InputState,
        tuning: &Tuning,
        bullets: &mut BulletPool,
        bullet_scale: f32,
    ) -> bool {
        let speed = if input.focus {
            tuning.player_focus_speed
        } else {
            tuning.player_speed
        };
        self.body.vel = input.direction() * speed;
        self.body.integrate(dt);
        self.body.pos = tuning.arena().clamp(self.body.pos);

        if self.invulnerable > 0.0 {
            self.invulnerable -= dt;
            if self.invulnerable <= 0.0 {
                self.invulnerable = 0.0;
                self.blinking = false;
            }
        }

        self.shoot_cooldown -= dt;
        if self.shoot_cooldown <= 0.0 {
            self.shoot(bullets, tuning, bullet_scale);
            // Add rather than assign so a late frame doesn't shift the cadence
            self.shoot_cooldown += tuning.fire_interval;
            return true;
        }
        false
    }

    /// Fire the fan of bullets straight up (toward -y)
    pub fn shoot(&self, bullets: &mut BulletPool, tuning: &Tuning, bullet_scale: f32) {
        let center = (PLAYER_FAN_SIZE as f32 - 1.0) * 0.5;
        for i in 0..PLAYER_FAN_SIZE {
            let t = i as f32 - center;
            let dir = normalized(Vec2::new(PLAYER_FAN_SPREAD * t * t * t, -1.0));
            bullets.spawn(
                Owner::Player,
                self.body.pos,
                dir * tuning.muzzle_speed,
                Vec2::ZERO,
                tuning.player_bullet_radius,
                bullet_scale,
            );
        }
    }

    /// Resolve an enemy bullet landing on the player
    pub fn take_damage(&mut self, tuning: &Tuning) -> DamageOutcome {
        if self.is_invulnerable() || self.lives == 0 {
            return DamageOutcome::Ignored;
        }
        self.lives -= 1;
        if self.lives == 0 {
            log::debug!("Player lost their last life");
            return DamageOutcome::Defeated;
        }
        log::debug!("Player hit, {} lives left", self.lives);
        self.body = Body::new(tuning.player_spawn(), Vec2::ZERO, Vec2::ZERO);
        self.invulnerable = tuning.invulnerability;
        self.blinking = true;
        DamageOutcome::Respawned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::enemy::Enemy;
    use crate::sim::input::Action;

    #[test]
    fn test_moves_at_speed() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        let mut bullets = BulletPool::new();
        let mut input = InputState::default();
        input.set(Action::MoveLeft, true);
        let start = player.body.pos;
        player.update(0.1, &input, &tuning, &mut bullets, 1.0);
        assert!((player.body.pos.x - (start.x - tuning.player_speed * 0.1)).abs() < 1e-3);
        assert_eq!(player.body.pos.y, start.y);
    }

    #[test]
    fn test_focus_slows_down() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        let mut bullets = BulletPool::new();
        let mut input = InputState::default();
        input.set(Action::MoveUp, true);
        input.set(Action::Focus, true);
        let start = player.body.pos;
        player.update(0.1, &input, &tuning, &mut bullets, 1.0);
        let moved = start.y - player.body.pos.y;
        assert!((moved - tuning.player_focus_speed * 0.1).abs() < 1e-3);
    }

    #[test]
    fn test_diagonal_not_faster() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        let mut bullets = BulletPool::new();
        let mut input = InputState::default();
        input.set(Action::MoveUp, true);
        input.set(Action::MoveLeft, true);
        let start = player.body.pos;
        player.update(0.1, &input, &tuning, &mut bullets, 1.0);
        let moved = (player.body.pos - start).length();
        assert!((moved - tuning.player_speed * 0.1).abs() < 1e-3);
    }

    #[test]
    fn test_clamped_to_arena() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        let mut bullets = BulletPool::new();
        let mut input = InputState::default();
        input.set(Action::MoveDown, true);
        input.set(Action::MoveRight, true);
        for _ in 0..100 {
            player.update(0.1, &input, &tuning, &mut bullets, 1.0);
        }
        assert_eq!(player.body.pos, Vec2::new(tuning.arena_width, tuning.arena_height));
    }

    #[test]
    fn test_fires_fan_on_cadence() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        let mut bullets = BulletPool::new();
        let input = InputState::default();

        // Cooldown starts at zero: first update fires
        assert!(player.update(0.01, &input, &tuning, &mut bullets, 1.0));
        assert_eq!(bullets.player_bullets().len(), PLAYER_FAN_SIZE);
        assert!(!player.update(0.01, &input, &tuning, &mut bullets, 1.0));

        // Cooldown accumulates instead of resetting
        let before = player.shoot_cooldown;
        player.update(tuning.fire_interval, &input, &tuning, &mut bullets, 1.0);
        assert!((player.shoot_cooldown - (before - tuning.fire_interval + tuning.fire_interval)).abs() < 1e-5);
        assert_eq!(bullets.player_bullets().len(), PLAYER_FAN_SIZE * 2);
    }

    #[test]
    fn test_fan_is_symmetric_and_at_muzzle_speed() {
        let tuning = Tuning::default();
        let player = Player::new(&tuning);
        let mut bullets = BulletPool::new();
        player.shoot(&mut bullets, &tuning, 1.0);
        let vels: Vec<Vec2> = bullets.player_bullets().iter().map(|b| b.body.vel).collect();
        assert_eq!(vels.len(), 5);
        for v in &vels {
            assert!((v.length() - tuning.muzzle_speed).abs() < 1e-2);
            assert!(v.y < 0.0);
        }
        assert_eq!(vels[2].x, 0.0);
        assert!((vels[0].x + vels[4].x).abs() < 1e-3);
        assert!((vels[1].x + vels[3].x).abs() < 1e-3);
        assert!(vels[0].x.abs() > vels[1].x.abs());
    }

    #[test]
    fn test_heavy_shots_scale_applies_at_spawn() {
        let tuning = Tuning::default();
        let player = Player::new(&tuning);
        let mut bullets = BulletPool::new();
        player.shoot(&mut bullets, &tuning, 2.0);
        for bullet in bullets.player_bullets() {
            assert_eq!(bullet.radius, tuning.player_bullet_radius * 2.0);
            assert!(bullet.scaled);
        }
    }

    #[test]
    fn test_volley_leaves_short_arena() {
        let tuning = Tuning {
            arena_height: 100.0,
            ..Tuning::default()
        };
        let player = Player::new(&tuning);
        let mut enemy = Enemy::new(&tuning);
        enemy.body.pos = Vec2::new(-1000.0, -1000.0);
        let mut shooter = player.clone();
        let mut bullets = BulletPool::new();
        player.shoot(&mut bullets, &tuning, 1.0);
        assert_eq!(bullets.len(), 5);

        let mut events = Vec::new();
        let mut removed = 0;
        for _ in 0..60 {
            let report = bullets.step_all(1.0 / 60.0, tuning.arena(), &mut shooter, &mut enemy, &tuning, &mut events);
            removed += report.removed();
            if bullets.is_empty() {
                break;
            }
        }
        assert_eq!(removed, 5);
        assert!(bullets.is_empty());
    }

    #[test]
    fn test_damage_respawns_with_invulnerability() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        player.body.pos = Vec2::new(10.0, 10.0);
        assert_eq!(player.take_damage(&tuning), DamageOutcome::Respawned);
        assert_eq!(player.lives, tuning.starting_lives - 1);
        assert_eq!(player.body.pos, tuning.player_spawn());
        assert!(player.is_invulnerable() && player.blinking);
        assert_eq!(player.take_damage(&tuning), DamageOutcome::Ignored);
    }

    #[test]
    fn test_invulnerability_expires() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        let mut bullets = BulletPool::new();
        player.take_damage(&tuning);
        let input = InputState::default();
        player.update(tuning.invulnerability + 0.01, &input, &tuning, &mut bullets, 1.0);
        assert!(!player.is_invulnerable());
        assert!(!player.blinking);
    }

    #[test]
    fn test_last_life_defeats_without_underflow() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        player.lives = 1;
        assert_eq!(player.take_damage(&tuning), DamageOutcome::Defeated);
        assert_eq!(player.lives, 0);
        assert_eq!(player.take_damage(&tuning), DamageOutcome::Ignored);
        assert_eq!(player.lives, 0);
    }
}
