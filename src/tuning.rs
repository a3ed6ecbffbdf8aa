//! Game balance and tuning
//!
//! Every number that shapes play feel lives here so a shell can override it
//! with a JSON file. Missing fields fall back to the defaults below.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::collision::Rect;

/// Data-driven balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Play area ===
    /// Play area width (pixels)
    pub arena_width: f32,
    /// Play area height (pixels)
    pub arena_height: f32,

    // === Player ===
    /// Movement speed (pixels/s)
    pub player_speed: f32,
    /// Movement speed while focus is held
    pub player_focus_speed: f32,
    /// Radius of the sprite (used for cosmetic queries only)
    pub player_sprite_radius: f32,
    /// Radius of the damage hitbox
    pub player_hitbox_radius: f32,
    /// Seconds between volleys
    pub fire_interval: f32,
    /// Speed of player bullets
    pub muzzle_speed: f32,
    /// Radius of player bullets
    pub player_bullet_radius: f32,
    /// Seconds of invulnerability after a hit
    pub invulnerability: f32,
    /// Lives at the start of a game
    pub starting_lives: u32,
    /// Score awarded per bullet landed on the enemy
    pub score_per_hit: u64,

    // === Enemy ===
    /// Radius of the enemy hitbox
    pub enemy_radius: f32,
    /// Health at level 0
    pub enemy_base_health: u32,
    /// Extra health per level
    pub enemy_health_per_level: u32,
    /// Radius of enemy bullets
    pub enemy_bullet_radius: f32,
    /// Speed of pattern 0 walls
    pub wall_speed: f32,
    /// Fraction of the arena height the enemy wanders in
    pub wander_band: f32,
    /// Seconds before a wander destination is re-rolled
    pub wander_timeout: f32,

    // === Frame loop ===
    /// Largest dt a single frame may advance (seconds)
    pub max_frame_dt: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: 480.0,
            arena_height: 640.0,

            player_speed: 320.0,
            player_focus_speed: 140.0,
            player_sprite_radius: 16.0,
            player_hitbox_radius: 4.0,
            fire_interval: 0.12,
            muzzle_speed: 600.0,
            player_bullet_radius: 4.0,
            invulnerability: 2.0,
            starting_lives: 3,
            score_per_hit: 10,

            enemy_radius: 40.0,
            enemy_base_health: 40,
            enemy_health_per_level: 20,
            enemy_bullet_radius: 6.0,
            wall_speed: 120.0,
            wander_band: 0.3,
            wander_timeout: 5.0,

            max_frame_dt: 0.1,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load tuning from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Malformed tuning file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read tuning file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// The play area rectangle (origin top-left)
    pub fn arena(&self) -> Rect {
        Rect::new(Vec2::ZERO, Vec2::new(self.arena_width, self.arena_height))
    }

    /// Where the player spawns and respawns
    pub fn player_spawn(&self) -> Vec2 {
        Vec2::new(self.arena_width * 0.5, self.arena_height * 0.85)
    }

    /// Where the enemy starts each round
    pub fn enemy_spawn(&self) -> Vec2 {
        Vec2::new(self.arena_width * 0.5, self.arena_height * 0.15)
    }

    /// Enemy health for a level: base + per_level * level
    pub fn enemy_health(&self, level: u32) -> u32 {
        self.enemy_base_health + self.enemy_health_per_level * level
    }
}
