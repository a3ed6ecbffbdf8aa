//! Boss Barrage - a bullet-pattern boss arena shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, bullets, collisions, attack patterns)
//! - `tuning`: Data-driven game balance
//! - `view`: Per-frame render snapshot for an external renderer
//! - `wasm`: Browser bindings (wasm32 only)

pub mod sim;
pub mod tuning;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use sim::{Action, Bonus, GameEvent, GamePhase, GameState, Owner};
pub use tuning::Tuning;
pub use view::{Hud, Instance, Snapshot};

/// Game configuration constants
pub mod consts {
    /// Reference frame rate used by the headless runner
    pub const REFERENCE_FPS: f32 = 60.0;
    /// Reference timestep (seconds)
    pub const REFERENCE_DT: f32 = 1.0 / REFERENCE_FPS;

    /// Bullets in the player's firing fan
    pub const PLAYER_FAN_SIZE: usize = 5;
    /// Sideways spread coefficient of the cubic fan formula
    pub const PLAYER_FAN_SPREAD: f32 = 0.05;

    /// Number of enemy attack patterns
    pub const ATTACK_PATTERN_COUNT: u32 = 4;

    /// Bullet speed of the aimed fan (pattern 1)
    pub const AIMED_FAN_SPEED: f32 = 150.0;
    /// Length the aim vector is scaled to before integer offsets are added
    pub const AIMED_FAN_REACH: f32 = 8.0;

    /// Outward launch speed of the radial burst (pattern 2)
    pub const BURST_SPEED: f32 = 200.0;
    /// Inward acceleration pulling burst bullets back
    pub const BURST_PULLBACK: f32 = 500.0;

    /// Launch speed toward the player for chaos aim (pattern 3)
    pub const CHAOS_SPEED: f32 = 200.0;
    /// Upper bound of each chaos bullet's random curve acceleration
    pub const CHAOS_MAX_CURVE: f32 = 600.0;
}
