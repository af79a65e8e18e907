//! Core types: combatants, actions, RNG, configuration.
//!
//! Everything here is independent of how encounters are run or how state is
//! stored.

pub mod action;
pub mod combatant;
pub mod config;
pub mod rng;

pub use action::Action;
pub use combatant::{
    growth, Combatant, CombatantSummary, InvalidCombatant, LevelUps, StatTemplate, XP_PER_LEVEL,
};
pub use config::SessionConfig;
pub use rng::GameRng;
