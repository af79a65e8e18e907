//! Opponent generation.
//!
//! Which wild creature appears, and at what level, is an outside decision.
//! The resolver asks an [`OpponentSource`] for a name and level, then turns
//! that into stats with a fixed scaling rule. Everything after the roll is
//! deterministic.

use serde::{Deserialize, Serialize};

use crate::core::{Combatant, GameRng};

/// Highest level a wild opponent can have.
pub const MAX_WILD_LEVEL: u32 = 5;

/// Wild creatures that can appear.
pub const WILD_ROSTER: [&str; 4] = ["Pidgey", "Rattata", "Weedle", "Zubat"];

/// Name and level for the next opponent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentSeed {
    pub name: String,
    pub level: u32,
}

impl OpponentSeed {
    #[must_use]
    pub fn new(name: impl Into<String>, level: u32) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }

    /// Build the opponent, with its level clamped to `1..=level_cap`.
    ///
    /// Stats scale with level:
    /// - hp: `10 + 2 * level`
    /// - atk: `3 + level`
    /// - defense: `2 + level / 2`
    #[must_use]
    pub fn spawn(&self, level_cap: u32) -> Combatant {
        let level = self.level.clamp(1, level_cap.max(1));
        let name = if self.name.is_empty() {
            WILD_ROSTER[0]
        } else {
            self.name.as_str()
        };
        Combatant::new(name, level, 10 + 2 * level, 3 + level, 2 + level / 2)
    }
}

/// Level cap for opponents facing a player of `player_level`.
#[must_use]
pub fn level_cap(player_level: u32) -> u32 {
    player_level.clamp(1, MAX_WILD_LEVEL)
}

/// Supplies the name and level of each new opponent.
pub trait OpponentSource {
    /// Pick the next opponent. `level_cap` is the highest level allowed;
    /// seeds above it are clamped by the resolver anyway.
    fn next_opponent(&mut self, level_cap: u32) -> OpponentSeed;
}

/// Random opponents from [`WILD_ROSTER`], reproducible by seed.
#[derive(Clone, Debug)]
pub struct RandomOpponents {
    rng: GameRng,
}

impl RandomOpponents {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Seed of the underlying RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl OpponentSource for RandomOpponents {
    fn next_opponent(&mut self, level_cap: u32) -> OpponentSeed {
        let name = self.rng.choose(&WILD_ROSTER).copied().unwrap_or(WILD_ROSTER[0]);
        let level = self.rng.gen_range(1..=level_cap.max(1));
        OpponentSeed::new(name, level)
    }
}

/// Always the same opponent. Used for scripted fights and tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedOpponent(pub OpponentSeed);

impl FixedOpponent {
    #[must_use]
    pub fn new(name: impl Into<String>, level: u32) -> Self {
        Self(OpponentSeed::new(name, level))
    }
}

impl OpponentSource for FixedOpponent {
    fn next_opponent(&mut self, _level_cap: u32) -> OpponentSeed {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_scaling() {
        let wild = OpponentSeed::new("Rattata", 3).spawn(5);

        assert_eq!(wild.name(), "Rattata");
        assert_eq!(wild.level(), 3);
        assert_eq!(wild.hp(), 16);
        assert_eq!(wild.max_hp(), 16);
        assert_eq!(wild.atk(), 6);
        assert_eq!(wild.defense(), 3);
        assert_eq!(wild.xp(), 0);
    }

    #[test]
    fn test_spawn_defense_rounds_down() {
        let lvl1 = OpponentSeed::new("Weedle", 1).spawn(5);
        let lvl5 = OpponentSeed::new("Weedle", 5).spawn(5);

        assert_eq!(lvl1.defense(), 2);
        assert_eq!(lvl5.defense(), 4);
        assert_eq!(lvl5.hp(), 20);
        assert_eq!(lvl5.atk(), 8);
    }

    #[test]
    fn test_spawn_clamps_level() {
        assert_eq!(OpponentSeed::new("Zubat", 9).spawn(3).level(), 3);
        assert_eq!(OpponentSeed::new("Zubat", 0).spawn(3).level(), 1);
        assert_eq!(OpponentSeed::new("Zubat", 4).spawn(0).level(), 1);
    }

    #[test]
    fn test_spawn_empty_name_falls_back() {
        assert_eq!(OpponentSeed::new("", 1).spawn(1).name(), "Pidgey");
    }

    #[test]
    fn test_level_cap() {
        assert_eq!(level_cap(1), 1);
        assert_eq!(level_cap(3), 3);
        assert_eq!(level_cap(5), 5);
        assert_eq!(level_cap(42), 5);
    }

    #[test]
    fn test_random_opponents_respect_cap() {
        let mut source = RandomOpponents::new(42);

        for cap in 1..=5 {
            for _ in 0..50 {
                let seed = source.next_opponent(cap);
                assert!((1..=cap).contains(&seed.level));
                assert!(WILD_ROSTER.contains(&seed.name.as_str()));
            }
        }
    }

    #[test]
    fn test_random_opponents_deterministic() {
        let mut a = RandomOpponents::new(9);
        let mut b = RandomOpponents::new(9);

        for _ in 0..20 {
            assert_eq!(a.next_opponent(5), b.next_opponent(5));
        }
    }

    #[test]
    fn test_fixed_opponent() {
        let mut source = FixedOpponent::new("Pidgey", 2);
        assert_eq!(source.next_opponent(5), OpponentSeed::new("Pidgey", 2));
        assert_eq!(source.next_opponent(1), OpponentSeed::new("Pidgey", 2));
    }
}
