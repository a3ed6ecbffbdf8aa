//! Game state and round lifecycle
//!
//! `GameState` owns everything the simulation mutates: player, enemy, bullets,
//! bonuses, the RNG and the round phase. Callers drive it through `step` (see
//! `tick.rs`) and the lifecycle methods below.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bonus::{Bonus, BonusSet};
use super::bullets::BulletPool;
use super::enemy::{AttackPattern, Enemy};
use super::input::{Action, InputState};
use super::player::Player;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Between rounds, waiting for a bonus pick
    Break,
    /// Active round
    Play,
    /// Player ran out of lives
    GameOver,
}

/// Things that happened during a step, for sound and effects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PlayerShot,
    EnemyHit { remaining: u32 },
    PlayerHit { lives_left: u32 },
    AttackChanged { pattern: AttackPattern },
    RoundStarted { level: u32 },
    RoundCleared { level: u32 },
    BonusesOffered { choices: [Bonus; 2] },
    GameOver { score: u64 },
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub player: Player,
    pub enemy: Enemy,
    pub bullets: BulletPool,
    pub bonuses: BonusSet,
    /// Bonuses on offer during a break
    pub offered: Option<[Bonus; 2]>,
    pub input: InputState,
    /// Rounds cleared this game
    pub rounds_cleared: u32,
    /// Seconds of simulated play
    pub play_time: f32,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game and start its first round
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            player: Player::new(&tuning),
            enemy: Enemy::new(&tuning),
            tuning,
            phase: GamePhase::Break,
            bullets: BulletPool::new(),
            bonuses: BonusSet::default(),
            offered: None,
            input: InputState::default(),
            rounds_cleared: 0,
            play_time: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        };
        state.start_round();
        state
    }

    /// Throw away the current game and begin again with the same seed
    pub fn new_game(&mut self) {
        log::info!("New game (seed {})", self.seed);
        *self = Self::new(self.seed, self.tuning.clone());
    }

    /// Clear the field, reset player and enemy for the current level, and play.
    /// Returns false if the game is over.
    pub fn start_round(&mut self) -> bool {
        if self.phase == GamePhase::GameOver {
            log::warn!("start_round called after game over");
            return false;
        }
        self.bullets.clear();
        self.offered = None;
        self.player.reset_for_round(&self.tuning, self.bonuses.player_hitbox_scale());
        self.enemy
            .reset_for_round(&self.tuning, self.bonuses.enemy_scale(), &mut self.rng);
        self.phase = GamePhase::Play;
        log::info!(
            "Round start: level {}, enemy health {}, lives {}",
            self.enemy.level,
            self.enemy.health,
            self.player.lives
        );
        self.events.push(GameEvent::RoundStarted {
            level: self.enemy.level,
        });
        self.events.push(GameEvent::AttackChanged {
            pattern: self.enemy.attack.pattern,
        });
        true
    }

    /// Enemy defeated: reward the player, level the enemy up and offer
    /// bonuses. Only acts while in `Play`, so repeated calls are harmless.
    pub fn handle_round_end(&mut self) {
        if self.phase != GamePhase::Play {
            return;
        }
        let cleared = self.enemy.level;
        self.player.lives += 1;
        self.enemy.level += 1;
        self.rounds_cleared += 1;
        self.phase = GamePhase::Break;
        log::info!("Round cleared at level {} (score {})", cleared, self.player.score);
        self.events.push(GameEvent::RoundCleared { level: cleared });

        match self.bonuses.offer_two(&mut self.rng) {
            Some(choices) => {
                log::info!("Offering {} / {}", choices[0].as_str(), choices[1].as_str());
                self.offered = Some(choices);
                self.events.push(GameEvent::BonusesOffered { choices });
            }
            None => {
                self.start_round();
            }
        }
    }

    /// Player lost their last life
    pub(crate) fn handle_game_over(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.offered = None;
        log::info!(
            "Game over: score {}, {} rounds cleared",
            self.player.score,
            self.rounds_cleared
        );
        self.events.push(GameEvent::GameOver {
            score: self.player.score,
        });
    }

    /// Mark a bonus active. Size bonuses take effect for bullets spawned
    /// from now on and hitboxes from the next round start.
    pub fn apply_bonus(&mut self, bonus: Bonus) -> bool {
        let newly = self.bonuses.activate(bonus);
        if newly {
            log::info!("Bonus active: {}", bonus.as_str());
        }
        newly
    }

    /// Claim one of the offered bonuses and start the next round
    pub fn choose_bonus(&mut self, bonus: Bonus) -> bool {
        let offered = matches!(self.offered, Some(choices) if choices.contains(&bonus));
        if self.phase != GamePhase::Break || !offered {
            log::warn!("{} is not on offer", bonus.as_str());
            return false;
        }
        self.apply_bonus(bonus);
        self.start_round()
    }

    pub fn set_input(&mut self, action: Action, pressed: bool) {
        self.input.set(action, pressed);
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_is_playing() {
        let state = GameState::new(1, Tuning::default());
        assert_eq!(state.phase, GamePhase::Play);
        assert_eq!(state.enemy.level, 1);
        assert_eq!(state.enemy.health, state.tuning.enemy_health(1));
        assert!(state.bullets.is_empty());
        assert!(matches!(state.events()[0], GameEvent::RoundStarted { level: 1 }));
    }

    #[test]
    fn test_round_end_is_idempotent() {
        let mut state = GameState::new(5, Tuning::default());
        let lives = state.player.lives;
        state.handle_round_end();
        state.handle_round_end();
        assert_eq!(state.phase, GamePhase::Break);
        assert_eq!(state.player.lives, lives + 1);
        assert_eq!(state.enemy.level, 2);
        assert_eq!(state.rounds_cleared, 1);
        assert!(state.offered.is_some());
    }

    #[test]
    fn test_choose_bonus_starts_next_round() {
        let mut state = GameState::new(5, Tuning::default());
        state.handle_round_end();
        let [pick, other] = state.offered.unwrap();
        assert!(state.choose_bonus(pick));
        assert_eq!(state.phase, GamePhase::Play);
        assert!(state.bonuses.is_active(pick));
        assert!(!state.bonuses.is_active(other));
        assert_eq!(state.enemy.health, state.tuning.enemy_health(2));
        // Not on offer any more
        assert!(!state.choose_bonus(other));
    }

    #[test]
    fn test_unoffered_bonus_rejected() {
        let mut state = GameState::new(5, Tuning::default());
        state.handle_round_end();
        let offered = state.offered.unwrap();
        let outsider = Bonus::ALL.into_iter().find(|b| !offered.contains(b)).unwrap();
        assert!(!state.choose_bonus(outsider));
        assert_eq!(state.phase, GamePhase::Break);
    }

    #[test]
    fn test_round_end_restarts_when_bonuses_run_out() {
        let mut state = GameState::new(5, Tuning::default());
        for bonus in &Bonus::ALL[1..] {
            state.apply_bonus(*bonus);
        }
        state.handle_round_end();
        assert_eq!(state.phase, GamePhase::Play);
        assert!(state.offered.is_none());
        assert_eq!(state.enemy.level, 2);
    }

    #[test]
    fn test_size_bonuses_apply_on_round_start() {
        let mut state = GameState::new(5, Tuning::default());
        state.apply_bonus(Bonus::BigTarget);
        state.apply_bonus(Bonus::TinyHeart);
        assert_eq!(state.enemy.radius, state.tuning.enemy_radius);
        state.handle_round_end();
        for bonus in Bonus::ALL {
            state.apply_bonus(bonus);
        }
        state.offered = None;
        state.phase = GamePhase::Break;
        state.start_round();
        assert_eq!(state.enemy.radius, state.tuning.enemy_radius * 1.25);
        assert_eq!(state.player.hitbox_radius, state.tuning.player_hitbox_radius * 0.5);
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut state = GameState::new(5, Tuning::default());
        state.handle_game_over();
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(!state.start_round());
        state.handle_round_end();
        assert_eq!(state.phase, GamePhase::GameOver);
        state.new_game();
        assert_eq!(state.phase, GamePhase::Play);
        assert_eq!(state.player.lives, state.tuning.starting_lives);
    }

    #[test]
    fn test_drain_events() {
        let mut state = GameState::new(5, Tuning::default());
        assert!(!state.drain_events().is_empty());
        assert!(state.events().is_empty());
    }
}
