//! Encounter resolution: one battle from first turn to outcome.
//!
//! ## State machine
//!
//! ```text
//!             Inspect
//!             ┌─────┐
//!             ▼     │
//!   start ─► Ongoing ──Attack, opponent faints──► PlayerWon
//!             │  ▲
//!             │  └─Attack, both standing
//!             ├──Attack, counter faints player──► PlayerLost
//!             └──Retreat────────────────────────► Retreated
//! ```
//!
//! The player always strikes first. Winning grants [`VICTORY_XP`] to the
//! player, which can cascade into several level-ups.
//!
//! The encounter holds the only mutable borrow of the player's creature for
//! as long as it lives; the opponent is owned and dropped with it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::error::EncounterError;
use super::exchange::{exchange, ExchangeOutcome};
use super::opponent::{level_cap, OpponentSource};
use crate::core::{Action, Combatant, CombatantSummary, LevelUps};

/// Experience granted for knocking out an opponent.
pub const VICTORY_XP: u32 = 5;

/// Where an encounter stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncounterState {
    Ongoing,
    PlayerWon,
    PlayerLost,
    Retreated,
}

impl EncounterState {
    /// Check if no more turns can be taken.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, EncounterState::Ongoing)
    }
}

impl std::fmt::Display for EncounterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EncounterState::Ongoing => "ongoing",
            EncounterState::PlayerWon => "player won",
            EncounterState::PlayerLost => "player lost",
            EncounterState::Retreated => "retreated",
        };
        f.write_str(name)
    }
}

/// Both creatures as they stood when the player inspected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inspection {
    pub player: CombatantSummary,
    pub opponent: CombatantSummary,
}

/// What happened on one turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// 1-based turn number.
    pub turn: u32,
    pub action: Action,
    /// State after the turn.
    pub state: EncounterState,
    /// Damage the player dealt this turn.
    pub damage_dealt: Option<u32>,
    /// Damage the opponent dealt back this turn.
    pub damage_taken: Option<u32>,
    /// Experience granted this turn (only on victory).
    pub xp_gained: u32,
    /// Level-ups the victory triggered.
    pub level_ups: LevelUps,
    /// Set for `Inspect` turns.
    pub inspection: Option<Inspection>,
}

impl TurnReport {
    fn new(turn: u32, action: Action, state: EncounterState) -> Self {
        Self {
            turn,
            action,
            state,
            damage_dealt: None,
            damage_taken: None,
            xp_gained: 0,
            level_ups: LevelUps::default(),
            inspection: None,
        }
    }

    /// Number of level-ups the player gained this turn.
    #[must_use]
    pub fn levels_gained(&self) -> u32 {
        self.level_ups.count
    }
}

/// One battle between the player's creature and a generated opponent.
///
/// ## Example
///
/// ```
/// use critter_quest::core::{Action, Combatant};
/// use critter_quest::encounter::{Encounter, EncounterState, FixedOpponent};
///
/// let mut player = Combatant::new("Caterpie", 5, 20, 7, 4);
/// let mut source = FixedOpponent::new("Rattata", 3);
/// let mut encounter = Encounter::start(&mut player, &mut source);
///
/// let report = encounter.submit_action(Action::Attack).unwrap();
/// assert_eq!(report.damage_dealt, Some(4));
/// assert_eq!(report.damage_taken, Some(2));
/// assert_eq!(report.state, EncounterState::Ongoing);
/// ```
#[derive(Debug)]
pub struct Encounter<'p> {
    player: &'p mut Combatant,
    opponent: Combatant,
    state: EncounterState,
    turn: u32,
    history: Vector<TurnReport>,
}

impl<'p> Encounter<'p> {
    /// Generate an opponent for `player` and begin.
    ///
    /// The opponent's level is capped at `min(5, player.level)`.
    pub fn start(player: &'p mut Combatant, source: &mut impl OpponentSource) -> Self {
        let cap = level_cap(player.level());
        let opponent = source.next_opponent(cap).spawn(cap);
        Self::with_opponent(player, opponent)
    }

    /// Begin against a specific opponent, skipping generation.
    ///
    /// Every encounter starts `Ongoing`, even when either side is already
    /// fainted. The first turn settles it: `Retreat` still escapes, and an
    /// `Attack` on a fainted opponent wins and grants [`VICTORY_XP`] like any
    /// other knockout. A fainted player that attacks a standing opponent
    /// loses to the counter.
    pub fn with_opponent(player: &'p mut Combatant, opponent: Combatant) -> Self {
        tracing::info!(
            player = %player.name(),
            opponent = %opponent.name(),
            opponent_level = opponent.level(),
            "encounter started"
        );

        Self {
            player,
            opponent,
            state: EncounterState::Ongoing,
            turn: 0,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> EncounterState {
        self.state
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    #[must_use]
    pub fn player(&self) -> &Combatant {
        &*self.player
    }

    #[must_use]
    pub fn opponent(&self) -> &Combatant {
        &self.opponent
    }

    /// Number of turns taken so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Reports for every accepted turn, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnReport> {
        &self.history
    }

    /// Both creatures' current summaries.
    #[must_use]
    pub fn inspect(&self) -> Inspection {
        Inspection {
            player: self.player.summary(),
            opponent: self.opponent.summary(),
        }
    }

    /// Parse raw input and play it as this turn's action.
    ///
    /// Unrecognized input returns [`EncounterError::InvalidAction`] and
    /// changes nothing.
    pub fn submit_input(&mut self, input: &str) -> Result<TurnReport, EncounterError> {
        let action = input.parse::<Action>().map_err(|e| {
            tracing::debug!(input, "rejected encounter input");
            e
        })?;
        self.submit_action(action)
    }

    /// Play one turn.
    pub fn submit_action(&mut self, action: Action) -> Result<TurnReport, EncounterError> {
        if self.state.is_terminal() {
            return Err(EncounterError::AlreadyResolved(self.state));
        }

        self.turn += 1;
        let mut report = TurnReport::new(self.turn, action, EncounterState::Ongoing);

        match action {
            Action::Retreat => {
                self.state = EncounterState::Retreated;
            }
            Action::Inspect => {
                report.inspection = Some(self.inspect());
            }
            Action::Attack => {
                let ex = exchange(&mut *self.player, &mut self.opponent);
                report.damage_dealt = Some(ex.dealt);
                report.damage_taken = ex.taken;

                tracing::debug!(
                    turn = self.turn,
                    dealt = ex.dealt,
                    taken = ?ex.taken,
                    player_hp = self.player.hp(),
                    opponent_hp = self.opponent.hp(),
                    "exchange"
                );

                match ex.outcome {
                    ExchangeOutcome::DefenderFainted => {
                        self.state = EncounterState::PlayerWon;
                        report.xp_gained = VICTORY_XP;
                        report.level_ups = self.player.gain_xp(VICTORY_XP);
                    }
                    ExchangeOutcome::AttackerFainted => {
                        self.state = EncounterState::PlayerLost;
                    }
                    ExchangeOutcome::BothStanding => {}
                }
            }
        }

        report.state = self.state;
        if self.state.is_terminal() {
            tracing::info!(
                outcome = %self.state,
                turns = self.turn,
                player_level = self.player.level(),
                "encounter ended"
            );
        }

        self.history.push_back(report.clone());
        Ok(report)
    }
}
