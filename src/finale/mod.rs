//! The level-100 finale.
//!
//! Once the player's creature reaches [`FINALE_LEVEL`] the regular menu is
//! replaced by a single choice:
//!
//! - **Run**: the creature loses its nerve and reverts to its starter stats
//!   (experience and max hp are kept).
//! - **Fight**: the creature is struck down, then a scripted [`Duel`] plays
//!   out between two legendary creatures using the same exchange rule as
//!   ordinary encounters.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{Combatant, StatTemplate};
use crate::encounter::{exchange, Exchange, ExchangeOutcome};

/// Level at which the finale replaces the menu.
pub const FINALE_LEVEL: u32 = 100;

/// Stats of the creature fighting on the player's side of the duel.
pub const CHAMPION: StatTemplate = StatTemplate {
    level: 100,
    hp: 500,
    atk: 150,
    defense: 100,
};

/// Stats of the duel's antagonist.
pub const ANTAGONIST: StatTemplate = StatTemplate {
    level: 100,
    hp: 350,
    atk: 140,
    defense: 90,
};

pub const CHAMPION_NAME: &str = "Rayquaza";
pub const ANTAGONIST_NAME: &str = "Mewtwo";

/// Input that isn't a finale choice.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid choice {0:?}: choose fight or run")]
pub struct InvalidChoice(pub String);

/// The player's answer to the finale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinaleChoice {
    Fight,
    Run,
}

impl FromStr for FinaleChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "f" | "fight" => Ok(FinaleChoice::Fight),
            "r" | "run" => Ok(FinaleChoice::Run),
            _ => Err(InvalidChoice(s.to_string())),
        }
    }
}

/// Check if `player` has reached the finale.
#[must_use]
pub fn is_due(player: &Combatant) -> bool {
    player.level() >= FINALE_LEVEL
}

/// Apply the player's choice.
///
/// Returns the duel to play out for `Fight`, or `None` after running away.
pub fn begin(player: &mut Combatant, choice: FinaleChoice) -> Option<Duel> {
    match choice {
        FinaleChoice::Run => {
            player.revert_to(&StatTemplate::STARTER);
            tracing::info!(name = %player.name(), "ran from the finale");
            None
        }
        FinaleChoice::Fight => {
            player.take_damage(player.hp());
            tracing::info!(name = %player.name(), "struck down, duel begins");
            Some(Duel::new())
        }
    }
}

/// Who won the duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuelOutcome {
    ChampionWon,
    AntagonistWon,
}

/// Scripted fight between [`CHAMPION`] and [`ANTAGONIST`].
///
/// The champion strikes first each round; one [`strike`](Duel::strike) is
/// one exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Duel {
    champion: Combatant,
    antagonist: Combatant,
    rounds: u32,
}

impl Default for Duel {
    fn default() -> Self {
        Self::new()
    }
}

impl Duel {
    #[must_use]
    pub fn new() -> Self {
        Self {
            champion: CHAMPION.spawn(CHAMPION_NAME),
            antagonist: ANTAGONIST.spawn(ANTAGONIST_NAME),
            rounds: 0,
        }
    }

    #[must_use]
    pub fn champion(&self) -> &Combatant {
        &self.champion
    }

    #[must_use]
    pub fn antagonist(&self) -> &Combatant {
        &self.antagonist
    }

    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// The winner, once one side has fainted.
    #[must_use]
    pub fn outcome(&self) -> Option<DuelOutcome> {
        if self.antagonist.is_fainted() {
            Some(DuelOutcome::ChampionWon)
        } else if self.champion.is_fainted() {
            Some(DuelOutcome::AntagonistWon)
        } else {
            None
        }
    }

    /// Play one exchange. Returns `None` once the duel is decided.
    pub fn strike(&mut self) -> Option<Exchange> {
        if self.outcome().is_some() {
            return None;
        }

        self.rounds += 1;
        let ex = exchange(&mut self.champion, &mut self.antagonist);
        if ex.outcome != ExchangeOutcome::BothStanding {
            tracing::info!(rounds = self.rounds, outcome = ?self.outcome(), "duel decided");
        }
        Some(ex)
    }

    /// Play exchanges until the duel is decided.
    pub fn run_to_end(&mut self) -> DuelOutcome {
        loop {
            if let Some(outcome) = self.outcome() {
                return outcome;
            }
            self.strike();
        }
    }
}
