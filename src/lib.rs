//! # critter-quest
//!
//! A single-creature battle and progression engine: the player raises one
//! creature, fights wild opponents turn by turn, levels up and saves
//! progress between sessions.
//!
//! ## Design Principles
//!
//! 1. **Deterministic Combat**: Damage is `max(1, atk - defense)`, the
//!    player always strikes first and growth per level is fixed. The only
//!    randomness is which opponent appears, and it comes from an injected
//!    source.
//!
//! 2. **Total Arithmetic**: hp, xp and stat changes saturate. No combat or
//!    growth operation can fail.
//!
//! 3. **Ports at the Edges**: Storage (`SaveStore`) and opponent generation
//!    (`OpponentSource`) are traits the caller supplies. The core never does
//!    I/O.
//!
//! ## Modules
//!
//! - `core`: Combatants, actions, RNG, configuration
//! - `encounter`: Opponent generation, the exchange rule, the turn resolver
//! - `codec`: Lossless record mapping for persistence
//! - `persistence`: The save-store port and its implementations
//! - `session`: The caller layer tying the player, store and opponents together
//! - `finale`: The level-100 event

pub mod core;
pub mod encounter;
pub mod codec;
pub mod persistence;
pub mod session;
pub mod finale;

// Re-export commonly used types
pub use crate::core::{
    Action, Combatant, CombatantSummary, GameRng, InvalidCombatant, LevelUps, SessionConfig,
    StatTemplate, XP_PER_LEVEL,
};

pub use crate::encounter::{
    Encounter, EncounterError, EncounterState, FixedOpponent, Inspection, OpponentSeed,
    OpponentSource, RandomOpponents, TurnReport,
};

pub use crate::codec::{decode, encode, CombatantRecord, MalformedRecord};

pub use crate::persistence::{JsonFileStore, MemoryStore, SaveStore, StoreError};

pub use crate::session::{MenuCommand, Session, SessionError};

pub use crate::finale::{Duel, DuelOutcome, FinaleChoice};
