//! Combatants: the stat bundle for any creature that can fight.
//!
//! The same type represents the player's long-lived creature and the
//! throwaway opponents generated for each encounter. Every mutation goes
//! through one of a handful of operations:
//!
//! - `take_damage`: clamped hp loss
//! - `attack_target`: the single damage formula, `max(1, atk - defense)`
//! - `gain_xp`: experience with cascading level-ups
//! - `level_up`: fixed stat growth, identical for every creature
//!
//! All arithmetic saturates, so none of these can fail.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Experience needed for one level-up.
pub const XP_PER_LEVEL: u32 = 10;

/// Fixed stat growth applied by a single level-up.
pub mod growth {
    /// Max hp gained per level.
    pub const MAX_HP: u32 = 5;
    /// Attack gained per level.
    pub const ATK: u32 = 2;
    /// Defense gained per level.
    pub const DEFENSE: u32 = 1;
}

/// Level-ups triggered by one `gain_xp` call.
///
/// Intermediate levels are not materialized: each one differs from the
/// next by the fixed [`growth`] deltas, so the count and the final summary
/// are enough to reconstruct them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUps {
    /// Levels gained.
    pub count: u32,
    /// The creature after the last level-up. `None` when `count` is 0.
    pub reached: Option<CombatantSummary>,
}

impl LevelUps {
    /// Check if no threshold was crossed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Levels reached, in order.
    pub fn levels(&self) -> impl Iterator<Item = u32> + '_ {
        let last = self.reached.as_ref().map_or(0, |s| s.level);
        (0..self.count).rev().map(move |back| last.saturating_sub(back))
    }
}

/// Rejected constructor arguments.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidCombatant {
    #[error("combatant name must not be empty")]
    EmptyName,

    #[error("combatant level must be at least 1")]
    ZeroLevel,

    #[error("combatant hp must be at least 1")]
    ZeroHp,
}

/// One creature's stats and state.
///
/// ## Example
///
/// ```
/// use critter_quest::core::Combatant;
///
/// let mut caterpie = Combatant::new("Caterpie", 5, 20, 7, 4);
/// let mut pidgey = Combatant::new("Pidgey", 3, 16, 6, 3);
///
/// assert_eq!(caterpie.attack_target(&mut pidgey), 4);
/// assert_eq!(pidgey.hp(), 12);
///
/// let level_ups = caterpie.gain_xp(25);
/// assert_eq!(level_ups.count, 2);
/// assert_eq!(caterpie.level(), 7);
/// assert_eq!(caterpie.xp(), 5);
/// ```
///
/// Not serializable on its own: persistence goes through
/// [`codec`](crate::codec), which validates what it reads back.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Combatant {
    name: String,
    level: u32,
    hp: u32,
    max_hp: u32,
    atk: u32,
    defense: u32,
    xp: u32,
}

impl Combatant {
    /// Create a creature at full health with no experience.
    ///
    /// `hp` doubles as the starting max hp.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty, `level` is 0 or `hp` is 0. Use
    /// [`Combatant::try_new`] for stats that come from outside the program.
    #[must_use]
    pub fn new(name: impl Into<String>, level: u32, hp: u32, atk: u32, defense: u32) -> Self {
        match Self::try_new(name, level, hp, atk, defense) {
            Ok(combatant) => combatant,
            Err(e) => panic!("{e}"),
        }
    }

    /// Create a creature, rejecting stats that break its invariants.
    pub fn try_new(
        name: impl Into<String>,
        level: u32,
        hp: u32,
        atk: u32,
        defense: u32,
    ) -> Result<Self, InvalidCombatant> {
        let name = name.into();
        if name.is_empty() {
            return Err(InvalidCombatant::EmptyName);
        }
        if level == 0 {
            return Err(InvalidCombatant::ZeroLevel);
        }
        if hp == 0 {
            return Err(InvalidCombatant::ZeroHp);
        }

        Ok(Self {
            name,
            level,
            hp,
            max_hp: hp,
            atk,
            defense,
            xp: 0,
        })
    }

    /// Rebuild a creature from fully specified state.
    ///
    /// Callers are expected to have validated the values already; the codec
    /// is the only path from untrusted data into this constructor.
    pub(crate) fn from_parts(
        name: String,
        level: u32,
        hp: u32,
        max_hp: u32,
        atk: u32,
        defense: u32,
        xp: u32,
    ) -> Self {
        debug_assert!(hp <= max_hp);
        Self {
            name,
            level,
            hp,
            max_hp,
            atk,
            defense,
            xp,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn hp(&self) -> u32 {
        self.hp
    }

    #[must_use]
    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    #[must_use]
    pub fn atk(&self) -> u32 {
        self.atk
    }

    #[must_use]
    pub fn defense(&self) -> u32 {
        self.defense
    }

    #[must_use]
    pub fn xp(&self) -> u32 {
        self.xp
    }

    /// Check if hp has reached zero.
    #[must_use]
    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    /// Lose `amount` hp, stopping at zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Damage this creature would deal to `target`.
    ///
    /// Never less than 1, so every attack makes progress.
    #[must_use]
    pub fn damage_against(&self, target: &Combatant) -> u32 {
        self.atk.saturating_sub(target.defense).max(1)
    }

    /// Strike `target` and return the damage dealt.
    pub fn attack_target(&self, target: &mut Combatant) -> u32 {
        let damage = self.damage_against(target);
        target.take_damage(damage);
        damage
    }

    /// Add experience, leveling up once per full threshold.
    ///
    /// A grant that crosses the threshold several times is applied in one
    /// step, with the same result as calling `level_up` once per crossing.
    pub fn gain_xp(&mut self, amount: u32) -> LevelUps {
        self.xp = self.xp.saturating_add(amount);

        let count = self.xp / XP_PER_LEVEL;
        let level_ups = if count == 0 {
            LevelUps::default()
        } else {
            self.grow(count);
            LevelUps {
                count,
                reached: Some(self.summary()),
            }
        };

        tracing::debug!(
            name = %self.name,
            amount,
            levels = count,
            xp = self.xp,
            "gained xp"
        );

        level_ups
    }

    /// Apply one step of stat growth and heal fully.
    pub fn level_up(&mut self) {
        self.grow(1);
    }

    fn grow(&mut self, levels: u32) {
        self.level = self.level.saturating_add(levels);
        self.xp = self.xp.saturating_sub(levels.saturating_mul(XP_PER_LEVEL));
        self.max_hp = self.max_hp.saturating_add(levels.saturating_mul(growth::MAX_HP));
        self.hp = self.max_hp;
        self.atk = self.atk.saturating_add(levels.saturating_mul(growth::ATK));
        self.defense = self.defense.saturating_add(levels.saturating_mul(growth::DEFENSE));

        tracing::info!(name = %self.name, level = self.level, levels, "leveled up");
    }

    /// Revert level, hp, attack and defense to an earlier template.
    ///
    /// Experience and max hp are kept. hp is capped at the current max hp.
    pub fn revert_to(&mut self, template: &StatTemplate) {
        self.level = template.level.max(1);
        self.hp = template.hp.min(self.max_hp);
        self.atk = template.atk;
        self.defense = template.defense;
    }

    /// Snapshot every attribute for display.
    #[must_use]
    pub fn summary(&self) -> CombatantSummary {
        CombatantSummary {
            name: self.name.clone(),
            level: self.level,
            hp: self.hp,
            max_hp: self.max_hp,
            atk: self.atk,
            defense: self.defense,
            xp: self.xp,
        }
    }
}

/// Base stats used to create (or revert) a creature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatTemplate {
    pub level: u32,
    pub hp: u32,
    pub atk: u32,
    pub defense: u32,
}

impl StatTemplate {
    /// Stats of a freshly hatched partner.
    pub const STARTER: StatTemplate = StatTemplate {
        level: 5,
        hp: 20,
        atk: 7,
        defense: 4,
    };

    /// Create a named creature with these stats.
    #[must_use]
    pub fn spawn(&self, name: impl Into<String>) -> Combatant {
        Combatant::new(name, self.level, self.hp, self.atk, self.defense)
    }
}

/// Read-only projection of a creature's attributes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombatantSummary {
    pub name: String,
    pub level: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub atk: u32,
    pub defense: u32,
    pub xp: u32,
}

impl std::fmt::Display for CombatantSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Level: {}", self.level)?;
        writeln!(f, "HP: {}/{}", self.hp, self.max_hp)?;
        writeln!(f, "Attack: {}", self.atk)?;
        writeln!(f, "Defense: {}", self.defense)?;
        write!(f, "XP: {}/{}", self.xp, XP_PER_LEVEL)
    }
}
