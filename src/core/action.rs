//! Player actions during an encounter.
//!
//! The caller reads raw text, parses it into an [`Action`] and hands it to
//! the resolver. Anything that doesn't parse is an
//! [`InvalidAction`](crate::encounter::EncounterError::InvalidAction) and
//! the caller asks again.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::encounter::EncounterError;

/// One turn's choice for the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Strike the opponent; it counters if it survives.
    Attack,
    /// Look at both creatures. Doesn't use up the turn.
    Inspect,
    /// Leave the encounter.
    Retreat,
}

impl Action {
    /// All actions, in menu order.
    pub const ALL: [Action; 3] = [Action::Attack, Action::Inspect, Action::Retreat];

    /// Check if this action ends the encounter by itself.
    #[must_use]
    pub fn is_retreat(self) -> bool {
        matches!(self, Action::Retreat)
    }
}

impl FromStr for Action {
    type Err = EncounterError;

    /// Parse menu input. Case and surrounding whitespace are ignored.
    ///
    /// ```
    /// use critter_quest::core::Action;
    ///
    /// assert_eq!("A".parse::<Action>().unwrap(), Action::Attack);
    /// assert_eq!(" summary ".parse::<Action>().unwrap(), Action::Inspect);
    /// assert!("x".parse::<Action>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "attack" => Ok(Action::Attack),
            "s" | "summary" | "i" | "inspect" => Ok(Action::Inspect),
            "r" | "run" | "retreat" => Ok(Action::Retreat),
            _ => Err(EncounterError::InvalidAction(s.to_string())),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Action::Attack => "attack",
            Action::Inspect => "inspect",
            Action::Retreat => "retreat",
        };
        f.write_str(name)
    }
}
