//! Persistence port for the player's creature.
//!
//! The core never touches storage. Callers hold a [`SaveStore`] and move
//! [`CombatantRecord`](crate::codec::CombatantRecord)s through it; decoding
//! into a live creature is the codec's job.
//!
//! - `JsonFileStore`: one JSON document on disk
//! - `MemoryStore`: in-process slot for tests and embedding

mod error;
mod file;
mod memory;
mod traits;

pub use error::{Result, StoreError};
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::SaveStore;
