//! Play sessions: the player's creature between encounters.
//!
//! A [`Session`] owns the one long-lived creature, the save store and the
//! opponent source. It is the layer a front end drives: start a game or
//! resume a save, open encounters, save, and hand off to the finale once the
//! creature is strong enough.
//!
//! ```
//! use critter_quest::core::Action;
//! use critter_quest::encounter::FixedOpponent;
//! use critter_quest::persistence::MemoryStore;
//! use critter_quest::session::Session;
//!
//! let mut session = Session::new_game("Bug", MemoryStore::new(), FixedOpponent::new("Pidgey", 1));
//! {
//!     let mut encounter = session.start_encounter();
//!     while !encounter.is_over() {
//!         encounter.submit_action(Action::Attack).unwrap();
//!     }
//! }
//! session.save().unwrap();
//!
//! let resumed = Session::resume(session.into_store(), FixedOpponent::new("Pidgey", 1))
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(resumed.player().xp(), 5);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec::{self, MalformedRecord};
use crate::core::{Combatant, StatTemplate};
use crate::encounter::{Encounter, OpponentSource};
use crate::finale::{self, Duel, FinaleChoice, InvalidChoice};
use crate::persistence::{SaveStore, StoreError};

/// Errors from loading or saving a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("save store error: {0}")]
    Store(#[from] StoreError),

    #[error("saved creature is unreadable: {0}")]
    Malformed(#[from] MalformedRecord),
}

impl SessionError {
    /// Check if the save exists but can't be used. Callers usually offer to
    /// start fresh in that case.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            SessionError::Malformed(_) | SessionError::Store(StoreError::Malformed(_))
        )
    }
}

/// Main menu commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuCommand {
    Battle,
    Summary,
    Save,
    /// Save and leave.
    Quit,
}

impl FromStr for MenuCommand {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "b" | "battle" => Ok(MenuCommand::Battle),
            "s" | "summary" => Ok(MenuCommand::Summary),
            "save" => Ok(MenuCommand::Save),
            "q" | "quit" => Ok(MenuCommand::Quit),
            _ => Err(InvalidChoice(s.to_string())),
        }
    }
}

/// The player's creature plus the collaborators it needs between fights.
#[derive(Debug)]
pub struct Session<S, O> {
    player: Combatant,
    store: S,
    opponents: O,
}

impl<S: SaveStore, O: OpponentSource> Session<S, O> {
    /// Begin a new game with a freshly hatched partner.
    pub fn new_game(nickname: impl Into<String>, store: S, opponents: O) -> Self {
        let player = StatTemplate::STARTER.spawn(nickname);
        tracing::info!(name = %player.name(), "new game");
        Self::with_player(player, store, opponents)
    }

    /// Wrap an existing creature.
    pub fn with_player(player: Combatant, store: S, opponents: O) -> Self {
        Self {
            player,
            store,
            opponents,
        }
    }

    /// Resume from the store. `Ok(None)` means nothing was saved.
    pub fn resume(store: S, opponents: O) -> Result<Option<Self>, SessionError> {
        let Some(record) = store.load()? else {
            return Ok(None);
        };

        let player = codec::decode(&record).map_err(|e| {
            tracing::warn!(error = %e, "rejected saved record");
            e
        })?;
        tracing::info!(name = %player.name(), level = player.level(), "resumed save");

        Ok(Some(Self::with_player(player, store, opponents)))
    }

    #[must_use]
    pub fn player(&self) -> &Combatant {
        &self.player
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give up the store, e.g. to resume from it later.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Check if the creature can no longer play.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.player.is_fainted()
    }

    /// Check if the finale should replace the menu.
    #[must_use]
    pub fn finale_due(&self) -> bool {
        finale::is_due(&self.player)
    }

    /// Open an encounter against the next generated opponent.
    pub fn start_encounter(&mut self) -> Encounter<'_> {
        Encounter::start(&mut self.player, &mut self.opponents)
    }

    /// Write the creature to the store, replacing any earlier save.
    pub fn save(&self) -> Result<(), SessionError> {
        self.store.save(&codec::encode(&self.player))?;
        tracing::info!(name = %self.player.name(), level = self.player.level(), "game saved");
        Ok(())
    }

    /// Apply the finale choice to the creature.
    pub fn begin_finale(&mut self, choice: FinaleChoice) -> Option<Duel> {
        finale::begin(&mut self.player, choice)
    }
}
