//! Held-key input state

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::vector::VecExt;

/// Player actions the shell can press and release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    MoveUp,
    MoveLeft,
    MoveDown,
    MoveRight,
    /// Slow, precise movement
    Focus,
}

impl Action {
    /// Default keyboard mapping (W/A/S/D, Shift to focus)
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "w" | "keyw" => Some(Action::MoveUp),
            "a" | "keya" => Some(Action::MoveLeft),
            "s" | "keys" => Some(Action::MoveDown),
            "d" | "keyd" => Some(Action::MoveRight),
            "shift" | "shiftleft" | "shiftright" => Some(Action::Focus),
            _ => None,
        }
    }
}

/// Which actions are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub up: bool,
    pub left: bool,
    pub down: bool,
    pub right: bool,
    pub focus: bool,
}

impl InputState {
    pub fn set(&mut self, action: Action, pressed: bool) {
        match action {
            Action::MoveUp => self.up = pressed,
            Action::MoveLeft => self.left = pressed,
            Action::MoveDown => self.down = pressed,
            Action::MoveRight => self.right = pressed,
            Action::Focus => self.focus = pressed,
        }
    }

    /// Unit movement direction (zero when nothing or opposing keys are held)
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        *dir.normalize_mut()
    }
}
