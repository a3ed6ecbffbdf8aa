//! Frame step
//!
//! One call advances the whole simulation atomically. Order matters:
//! player, then enemy, then bullets, so bullet hits see this frame's
//! positions.

use super::state::{GameEvent, GamePhase, GameState};

/// Turns monotonic frame timestamps into clamped delta-times
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous timestamp. The first frame, and any
    /// timestamp that runs backwards, yields zero.
    pub fn advance(&mut self, timestamp_ms: f64, max_dt: f32) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((timestamp_ms - last) / 1000.0).max(0.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(timestamp_ms);
        dt.min(max_dt)
    }

    /// Forget the previous timestamp (after a pause, tab switch, ...)
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

/// Advance the game by `dt` seconds. Does nothing outside `Play`.
pub fn tick(state: &mut GameState, dt: f32) {
    if state.phase != GamePhase::Play {
        return;
    }
    state.play_time += dt;

    let player_scale = state.bonuses.player_bullet_scale();
    let enemy_scale = state.bonuses.enemy_bullet_scale();

    if state
        .player
        .update(dt, &state.input, &state.tuning, &mut state.bullets, player_scale)
    {
        state.events.push(GameEvent::PlayerShot);
    }

    state.enemy.update(
        dt,
        state.player.body.pos,
        &mut state.bullets,
        &mut state.rng,
        &state.tuning,
        enemy_scale,
        &mut state.events,
    );

    let arena = state.tuning.arena();
    let report = state.bullets.step_all(
        dt,
        arena,
        &mut state.player,
        &mut state.enemy,
        &state.tuning,
        &mut state.events,
    );
    if report.removed() > 0 {
        log::trace!(
            "Bullets removed: {} out of bounds, {} on enemy, {} on player ({} live)",
            report.left_arena,
            report.enemy_hits,
            report.player_hits,
            state.bullets.len()
        );
    }

    // A kill on the same frame as the last hit taken still clears the round
    if !state.enemy.is_alive() {
        state.handle_round_end();
    } else if state.player.lives == 0 {
        state.handle_game_over();
    }
}

impl GameState {
    /// Advance by `dt` seconds (no-op unless playing)
    pub fn step(&mut self, dt: f32) {
        tick(self, dt);
    }

    /// Advance using a frame timestamp; returns the dt that was applied
    pub fn frame(&mut self, clock: &mut FrameClock, timestamp_ms: f64) -> f32 {
        let dt = clock.advance(timestamp_ms, self.tuning.max_frame_dt);
        self.step(dt);
        dt
    }
}
