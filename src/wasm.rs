//! Browser bindings
//!
//! The page owns the canvas, the key listeners and the animation loop. It
//! hands us a timestamp each frame and reads back instances and HUD data.

use wasm_bindgen::prelude::*;

use crate::sim::{Action, Bonus, FrameClock, GameState};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Boss Barrage starting...");
}

/// A game instance driven from JavaScript
#[wasm_bindgen]
pub struct WebGame {
    state: GameState,
    clock: FrameClock,
}

#[wasm_bindgen]
impl WebGame {
    /// New game. `tuning_json` may be empty to use defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64, tuning_json: &str) -> WebGame {
        let tuning = if tuning_json.is_empty() {
            Tuning::default()
        } else {
            Tuning::from_json(tuning_json).unwrap_or_else(|e| {
                log::warn!("Ignoring bad tuning: {}", e);
                Tuning::default()
            })
        };
        log::info!("Game initialized with seed: {}", seed);
        WebGame {
            state: GameState::new(seed, tuning),
            clock: FrameClock::new(),
        }
    }

    /// Advance to `timestamp` (ms, e.g. from requestAnimationFrame)
    pub fn frame(&mut self, timestamp: f64) -> f32 {
        self.state.frame(&mut self.clock, timestamp)
    }

    /// Call after the tab was hidden so the next frame doesn't jump
    pub fn reset_clock(&mut self) {
        self.clock.reset();
    }

    /// Forward a key event. Returns true if the key is bound.
    pub fn set_key(&mut self, key: &str, pressed: bool) -> bool {
        match Action::from_key(key) {
            Some(action) => {
                self.state.set_input(action, pressed);
                true
            }
            None => false,
        }
    }

    pub fn start_round(&mut self) -> bool {
        self.state.start_round()
    }

    pub fn new_game(&mut self) {
        self.state.new_game();
        self.clock.reset();
    }

    /// Pick offered bonus 0 or 1
    pub fn choose_bonus(&mut self, index: usize) -> bool {
        let Some(choices) = self.state.offered else {
            return false;
        };
        match choices.get(index) {
            Some(&bonus) => self.state.choose_bonus(bonus),
            None => false,
        }
    }

    /// Names of the bonuses on offer
    pub fn offered_bonus_names(&self) -> Vec<String> {
        self.state
            .offered
            .map(|choices| choices.iter().map(|b: &Bonus| b.as_str().to_string()).collect())
            .unwrap_or_default()
    }

    /// Packed instances: [x, y, vx, vy, radius, flags-as-bits] per entity
    pub fn instances(&self) -> js_sys::Float32Array {
        let snapshot = self.state.snapshot();
        js_sys::Float32Array::from(snapshot.instance_floats())
    }

    pub fn hud_json(&self) -> String {
        serde_json::to_string(&self.state.snapshot().hud).unwrap_or_default()
    }

    /// Events since the last call, as JSON
    pub fn drain_events_json(&mut self) -> String {
        serde_json::to_string(&self.state.drain_events()).unwrap_or_default()
    }
}
