//! Boss Barrage headless runner
//!
//! Drives the simulation at the reference frame rate with a simple dodging
//! bot, picking the first offered bonus at every break. Useful as a soak test
//! and for balancing.
//!
//! Usage: boss-barrage [seconds] [seed] [tuning.json]

#[cfg(not(target_arch = "wasm32"))]
use boss_barrage::consts::REFERENCE_DT;
#[cfg(not(target_arch = "wasm32"))]
use boss_barrage::sim::{Action, GameEvent, GamePhase, GameState};
#[cfg(not(target_arch = "wasm32"))]
use boss_barrage::tuning::Tuning;
#[cfg(not(target_arch = "wasm32"))]
use glam::Vec2;

/// How close an enemy bullet must be before the bot reacts
#[cfg(not(target_arch = "wasm32"))]
const DANGER_RADIUS: f32 = 60.0;

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser entry point lives in the library (`wasm::start`)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seconds: f32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(60.0);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(12345);
    let tuning = args.next().map(Tuning::load).unwrap_or_default();

    log::info!("Boss Barrage (headless) starting: {}s, seed {}", seconds, seed);

    let mut state = GameState::new(seed, tuning);
    let frames = (seconds / REFERENCE_DT) as u64;
    let mut shots_landed = 0u64;
    let mut hits_taken = 0u64;

    for _ in 0..frames {
        match state.phase {
            GamePhase::Play => {
                steer(&mut state);
                state.step(REFERENCE_DT);
            }
            GamePhase::Break => {
                if let Some([pick, _]) = state.offered {
                    state.choose_bonus(pick);
                }
            }
            GamePhase::GameOver => break,
        }

        for event in state.drain_events() {
            match event {
                GameEvent::EnemyHit { .. } => shots_landed += 1,
                GameEvent::PlayerHit { .. } => hits_taken += 1,
                GameEvent::AttackChanged { pattern } => log::debug!("Attack: {:?}", pattern),
                _ => {}
            }
        }
    }

    log::info!(
        "Finished after {:.1}s of play: {} shots landed, {} hits taken",
        state.play_time,
        shots_landed,
        hits_taken
    );

    match serde_json::to_string_pretty(&state.snapshot().hud) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not encode summary: {}", e),
    }
}

/// Dodge the closest threatening bullet, otherwise line up under the enemy
#[cfg(not(target_arch = "wasm32"))]
fn steer(state: &mut GameState) {
    let me = state.player.body.pos;
    let threat = state
        .bullets
        .enemy_bullets()
        .iter()
        .map(|b| b.pos())
        .filter(|p| p.distance(me) < DANGER_RADIUS)
        .min_by(|a, b| {
            a.distance(me)
                .partial_cmp(&b.distance(me))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let wish = match threat {
        Some(p) => me - p,
        None => Vec2::new(state.enemy.body.pos.x - me.x, 0.0),
    };

    state.set_input(Action::MoveLeft, wish.x < -2.0);
    state.set_input(Action::MoveRight, wish.x > 2.0);
    state.set_input(Action::MoveUp, threat.is_some() && wish.y < -2.0);
    state.set_input(Action::MoveDown, threat.is_some() && wish.y > 2.0);
    state.set_input(Action::Focus, threat.is_some() && wish.length() < DANGER_RADIUS * 0.3);
}
