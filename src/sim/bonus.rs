//! Style bonuses picked between rounds
//!
//! Most bonuses only change how things look. A few also change hitbox sizes,
//! and those are read when bullets are spawned or when a round starts, never
//! applied retroactively.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Bonus catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bonus {
    /// Player bullets are twice as large
    HeavyShots,
    /// Player hitbox is halved
    TinyHeart,
    /// Enemy hitbox grows by a quarter
    BigTarget,
    /// Enemy bullets grow by half (a difficulty bonus)
    Bloated,
    /// Bullet trails (cosmetic)
    NeonTrails,
    /// Hit sparks (cosmetic)
    Confetti,
}

impl Bonus {
    pub const ALL: [Bonus; 6] = [
        Bonus::HeavyShots,
        Bonus::TinyHeart,
        Bonus::BigTarget,
        Bonus::Bloated,
        Bonus::NeonTrails,
        Bonus::Confetti,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Bonus::HeavyShots => "Heavy Shots",
            Bonus::TinyHeart => "Tiny Heart",
            Bonus::BigTarget => "Big Target",
            Bonus::Bloated => "Bloated",
            Bonus::NeonTrails => "Neon Trails",
            Bonus::Confetti => "Confetti",
        }
    }
}

/// Which bonuses have been claimed this game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusSet {
    active: [bool; Bonus::ALL.len()],
}

impl BonusSet {
    #[inline]
    pub fn is_active(&self, bonus: Bonus) -> bool {
        self.active[bonus.index()]
    }

    /// Mark a bonus active. Returns false if it already was.
    pub fn activate(&mut self, bonus: Bonus) -> bool {
        let was_active = self.active[bonus.index()];
        self.active[bonus.index()] = true;
        !was_active
    }

    pub fn active(&self) -> impl Iterator<Item = Bonus> + '_ {
        Bonus::ALL.into_iter().filter(|b| self.is_active(*b))
    }

    pub fn unclaimed(&self) -> impl Iterator<Item = Bonus> + '_ {
        Bonus::ALL.into_iter().filter(|b| !self.is_active(*b))
    }

    /// Pick two distinct unclaimed bonuses, or None if fewer than two remain
    pub fn offer_two(&self, rng: &mut impl Rng) -> Option<[Bonus; 2]> {
        let mut pool: Vec<Bonus> = self.unclaimed().collect();
        if pool.len() < 2 {
            return None;
        }
        let first = pool.swap_remove(rng.random_range(0..pool.len()));
        let second = pool[rng.random_range(0..pool.len())];
        Some([first, second])
    }

    /// Radius multiplier for newly spawned player bullets
    pub fn player_bullet_scale(&self) -> f32 {
        if self.is_active(Bonus::HeavyShots) { 2.0 } else { 1.0 }
    }

    /// Radius multiplier for newly spawned enemy bullets
    pub fn enemy_bullet_scale(&self) -> f32 {
        if self.is_active(Bonus::Bloated) { 1.5 } else { 1.0 }
    }

    /// Radius multiplier for the player hitbox
    pub fn player_hitbox_scale(&self) -> f32 {
        if self.is_active(Bonus::TinyHeart) { 0.5 } else { 1.0 }
    }

    /// Radius multiplier for the enemy hitbox
    pub fn enemy_scale(&self) -> f32 {
        if self.is_active(Bonus::BigTarget) { 1.25 } else { 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_activate_once() {
        let mut set = BonusSet::default();
        assert!(set.activate(Bonus::Confetti));
        assert!(!set.activate(Bonus::Confetti));
        assert_eq!(set.active().collect::<Vec<_>>(), vec![Bonus::Confetti]);
        assert_eq!(set.unclaimed().count(), Bonus::ALL.len() - 1);
    }

    #[test]
    fn test_offer_two_distinct_unclaimed() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut set = BonusSet::default();
        set.activate(Bonus::HeavyShots);
        for _ in 0..50 {
            let [a, b] = set.offer_two(&mut rng).unwrap();
            assert_ne!(a, b);
            assert!(!set.is_active(a) && !set.is_active(b));
        }
    }

    #[test]
    fn test_offer_requires_two_remaining() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut set = BonusSet::default();
        for bonus in &Bonus::ALL[..Bonus::ALL.len() - 1] {
            set.activate(*bonus);
        }
        assert!(set.offer_two(&mut rng).is_none());
    }

    #[test]
    fn test_scales() {
        let mut set = BonusSet::default();
        assert_eq!(set.player_bullet_scale(), 1.0);
        set.activate(Bonus::HeavyShots);
        set.activate(Bonus::TinyHeart);
        assert_eq!(set.player_bullet_scale(), 2.0);
        assert_eq!(set.player_hitbox_scale(), 0.5);
        assert_eq!(set.enemy_scale(), 1.0);
    }
}
