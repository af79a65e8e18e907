//! Encounters: one battle between the player and a generated opponent.
//!
//! - `opponent`: where opponents come from and how their stats scale
//! - `exchange`: the attack-then-counter rule
//! - `resolver`: the per-turn state machine
//!
//! ## Example
//!
//! ```
//! use critter_quest::core::{Action, Combatant};
//! use critter_quest::encounter::{Encounter, EncounterState, FixedOpponent};
//!
//! let mut player = Combatant::new("Caterpie", 5, 20, 7, 4);
//! let mut source = FixedOpponent::new("Rattata", 3);
//! let mut encounter = Encounter::start(&mut player, &mut source);
//!
//! while !encounter.is_over() {
//!     encounter.submit_action(Action::Attack).unwrap();
//! }
//! assert_eq!(encounter.state(), EncounterState::PlayerWon);
//! ```

pub mod error;
pub mod exchange;
pub mod opponent;
pub mod resolver;

pub use error::EncounterError;
pub use exchange::{exchange, Exchange, ExchangeOutcome};
pub use opponent::{
    level_cap, FixedOpponent, OpponentSeed, OpponentSource, RandomOpponents, MAX_WILD_LEVEL,
    WILD_ROSTER,
};
pub use resolver::{Encounter, EncounterState, Inspection, TurnReport, VICTORY_XP};
