//! Lossless mapping between a [`Combatant`](crate::core::Combatant) and its
//! persisted record.
//!
//! ```
//! use critter_quest::codec::{decode, encode};
//! use critter_quest::core::Combatant;
//!
//! let mut caterpie = Combatant::new("Caterpie", 5, 20, 7, 4);
//! caterpie.gain_xp(13);
//!
//! let restored = decode(&encode(&caterpie)).unwrap();
//! assert_eq!(restored, caterpie);
//! ```

pub mod error;
pub mod record;

pub use error::MalformedRecord;
pub use record::{decode, encode, from_json, to_json, CombatantRecord};
