//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied dt only, no clocks
//! - Seeded RNG only
//! - Stable iteration order
//! - No rendering or platform dependencies

pub mod bonus;
pub mod bullets;
pub mod collision;
pub mod enemy;
pub mod input;
pub mod kinematics;
pub mod player;
pub mod state;
pub mod tick;
pub mod vector;

pub use bonus::{Bonus, BonusSet};
pub use bullets::{Bullet, BulletId, BulletPool, Owner, StepReport};
pub use collision::{Rect, circles_overlap, point_in_circle};
pub use enemy::{AttackPattern, AttackState, Enemy, MoveState};
pub use input::{Action, InputState};
pub use kinematics::Body;
pub use player::{DamageOutcome, Player};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{FrameClock, tick};
pub use vector::{VecExt, distance};
