//! Boss enemy: wandering movement and the attack pattern state machine
//!
//! Two timers drive attacks. The outer `attack_timer` decides how long the
//! current pattern stays active; when it runs out a new pattern is rolled.
//! The inner `think_timer` fires the pattern's volley at its own cadence
//! while the pattern is active. Both re-arm from dt, not from frame count.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bullets::{BulletPool, Owner};
use super::kinematics::Body;
use super::state::GameEvent;
use super::vector::{distance, from_angle, normalized};
use crate::consts::*;
use crate::tuning::Tuning;

/// Enemy bullet patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackPattern {
    /// Converging walls from opposite edges
    Walls = 0,
    /// Fan aimed at the player
    AimedFan = 1,
    /// Random burst that falls back toward the enemy
    RadialBurst = 2,
    /// Aimed shots that curve off randomly
    ChaosAim = 3,
}

impl AttackPattern {
    pub const ALL: [AttackPattern; ATTACK_PATTERN_COUNT as usize] = [
        AttackPattern::Walls,
        AttackPattern::AimedFan,
        AttackPattern::RadialBurst,
        AttackPattern::ChaosAim,
    ];

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Uniformly random pattern
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// How long the pattern stays active (seconds)
    pub fn duration(self) -> f32 {
        match self {
            AttackPattern::Walls => 10.0,
            AttackPattern::AimedFan => 6.0,
            AttackPattern::RadialBurst => 8.0,
            AttackPattern::ChaosAim => 6.0,
        }
    }

    /// Seconds between volleys
    pub fn think_interval(self) -> f32 {
        match self {
            AttackPattern::Walls => 2.0,
            AttackPattern::AimedFan => 0.6,
            AttackPattern::RadialBurst => 1.5,
            AttackPattern::ChaosAim => 2.0,
        }
    }

    /// Wander speed while the pattern is active
    pub fn move_speed(self) -> f32 {
        match self {
            AttackPattern::Walls => 50.0,
            AttackPattern::AimedFan => 300.0,
            AttackPattern::RadialBurst => 150.0,
            AttackPattern::ChaosAim => 200.0,
        }
    }
}

/// Attack state machine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackState {
    pub pattern: AttackPattern,
    /// Seconds until a new pattern is rolled
    pub attack_timer: f32,
    /// Seconds until the next volley
    pub think_timer: f32,
    pub think_interval: f32,
    /// Volleys fired since the pattern was entered
    pub think_ticks: u32,
}

/// Wandering movement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveState {
    pub destination: Vec2,
    pub speed: f32,
    /// Seconds until the destination is re-rolled regardless of progress
    pub timer: f32,
}

/// The boss
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub body: Body,
    pub radius: f32,
    pub level: u32,
    pub health: u32,
    pub max_health: u32,
    pub attack: AttackState,
    pub movement: MoveState,
}

impl Enemy {
    pub fn new(tuning: &Tuning) -> Self {
        let pattern = AttackPattern::Walls;
        let health = tuning.enemy_health(1);
        let spawn = tuning.enemy_spawn();
        Self {
            body: Body::new(spawn, Vec2::ZERO, Vec2::ZERO),
            radius: tuning.enemy_radius,
            level: 1,
            health,
            max_health: health,
            attack: AttackState {
                pattern,
                attack_timer: pattern.duration(),
                think_timer: pattern.think_interval(),
                think_interval: pattern.think_interval(),
                think_ticks: 0,
            },
            movement: MoveState {
                destination: spawn,
                speed: pattern.move_speed(),
                timer: tuning.wander_timeout,
            },
        }
    }

    /// Per-round reset: back to the spawn point with full health for the
    /// current level, starting a random attack.
    pub fn reset_for_round(&mut self, tuning: &Tuning, size_scale: f32, rng: &mut impl Rng) {
        self.body = Body::new(tuning.enemy_spawn(), Vec2::ZERO, Vec2::ZERO);
        self.radius = tuning.enemy_radius * size_scale;
        self.health = tuning.enemy_health(self.level);
        self.max_health = self.health;
        self.enter_attack(AttackPattern::random(rng), tuning, rng);
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Remaining health in [0, 1]
    pub fn health_fraction(&self) -> f32 {
        if self.max_health == 0 {
            0.0
        } else {
            self.health as f32 / self.max_health as f32
        }
    }

    pub fn take_hit(&mut self) {
        self.health = self.health.saturating_sub(1);
    }

    /// Switch to `pattern`, resetting its timers and the wander target
    pub fn enter_attack(&mut self, pattern: AttackPattern, tuning: &Tuning, rng: &mut impl Rng) {
        self.attack = AttackState {
            pattern,
            attack_timer: pattern.duration(),
            think_timer: pattern.think_interval(),
            think_interval: pattern.think_interval(),
            think_ticks: 0,
        };
        self.movement.speed = pattern.move_speed();
        self.reroll_destination(tuning, rng);
    }

    /// Pick a new wander target in the band near the top of the arena
    pub fn reroll_destination(&mut self, tuning: &Tuning, rng: &mut impl Rng) {
        let r = self.radius;
        let max_x = (tuning.arena_width - r).max(r);
        let max_y = (tuning.arena_height * tuning.wander_band).max(r);
        self.movement.destination = Vec2::new(rng.random_range(r..=max_x), rng.random_range(r..=max_y));
        self.movement.timer = tuning.wander_timeout;
    }

    /// Advance movement and the attack state machine
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        dt: f32,
        player_pos: Vec2,
        bullets: &mut BulletPool,
        rng: &mut impl Rng,
        tuning: &Tuning,
        bullet_scale: f32,
        events: &mut Vec<GameEvent>,
    ) {
        self.update_movement(dt, tuning, rng);

        self.attack.attack_timer -= dt;
        if self.attack.attack_timer <= 0.0 {
            let pattern = AttackPattern::random(rng);
            log::debug!("Enemy switches to {:?}", pattern);
            self.enter_attack(pattern, tuning, rng);
            events.push(GameEvent::AttackChanged { pattern });
            return;
        }

        self.attack.think_timer -= dt;
        if self.attack.think_timer <= 0.0 {
            let tick = self.attack.think_ticks;
            self.think(self.attack.pattern, tick, player_pos, bullets, rng, tuning, bullet_scale);
            self.attack.think_ticks += 1;
            self.attack.think_timer += self.attack.think_interval;
        }
    }

    fn update_movement(&mut self, dt: f32, tuning: &Tuning, rng: &mut impl Rng) {
        self.movement.timer -= dt;
        let arrived = distance(self.body.pos, self.movement.destination) < self.radius * 2.0;
        if arrived || self.movement.timer <= 0.0 {
            self.reroll_destination(tuning, rng);
        }
        self.body.vel = normalized(self.movement.destination - self.body.pos) * self.movement.speed;
        self.body.integrate(dt);
    }

    /// Emit one volley of `pattern`. Returns the number of bullets spawned.
    #[allow(clippy::too_many_arguments)]
    pub fn think(
        &self,
        pattern: AttackPattern,
        tick: u32,
        player_pos: Vec2,
        bullets: &mut BulletPool,
        rng: &mut impl Rng,
        tuning: &Tuning,
        bullet_scale: f32,
    ) -> usize {
        let before = bullets.enemy_bullets().len();
        let mut fire = |pos: Vec2, vel: Vec2, acc: Vec2| {
            bullets.spawn(Owner::Enemy, pos, vel, acc, tuning.enemy_bullet_radius, bullet_scale);
        };
        let level = self.level;
        let origin = self.body.pos;
        // Player on the enemy center: shoot straight down
        let mut aim = normalized(player_pos - origin);
        if aim == Vec2::ZERO {
            aim = Vec2::Y;
        }

        match pattern {
            AttackPattern::Walls => {
                let (w, h) = (tuning.arena_width, tuning.arena_height);
                let speed = tuning.wall_speed;
                if tick % 2 == 0 {
                    // Left and right edges, sweeping horizontally
                    let count = 10 + 2 * level;
                    let spacing = h / count as f32;
                    for (edge_x, dir) in [(0.0, 1.0), (w, -1.0)] {
                        let jitter = rng.random_range(-0.5f32..0.5) * spacing;
                        for j in 0..count {
                            let y = (j as f32 + 0.5) * spacing + jitter;
                            fire(Vec2::new(edge_x, y), Vec2::new(dir * speed, 0.0), Vec2::ZERO);
                        }
                    }
                } else {
                    // Top and bottom edges, sweeping vertically
                    let count = 7 + level;
                    let spacing = w / count as f32;
                    for (edge_y, dir) in [(0.0, 1.0), (h, -1.0)] {
                        let jitter = rng.random_range(-0.5f32..0.5) * spacing;
                        for j in 0..count {
                            let x = (j as f32 + 0.5) * spacing + jitter;
                            fire(Vec2::new(x, edge_y), Vec2::new(0.0, dir * speed), Vec2::ZERO);
                        }
                    }
                }
            }
            AttackPattern::AimedFan => {
                let reach = 1 + level as i32;
                let side = aim.perp();
                for k in -reach..reach {
                    let dir = normalized(aim * AIMED_FAN_REACH + side * k as f32);
                    fire(origin, dir * AIMED_FAN_SPEED, Vec2::ZERO);
                }
            }
            AttackPattern::RadialBurst => {
                for _ in 0..15 + 10 * level {
                    let dir = from_angle(rng.random_range(0.0..TAU));
                    fire(origin, dir * BURST_SPEED, -dir * BURST_PULLBACK);
                }
            }
            AttackPattern::ChaosAim => {
                for _ in 0..12 + 6 * level {
                    let curve = from_angle(rng.random_range(0.0..TAU)) * rng.random_range(0.0..CHAOS_MAX_CURVE);
                    fire(origin, aim * CHAOS_SPEED, curve);
                }
            }
        }

        bullets.enemy_bullets().len() - before
    }
}
