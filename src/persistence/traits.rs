//! The persistence port.

use super::error::Result;
use crate::codec::CombatantRecord;

/// Storage for the single saved creature.
///
/// Saving overwrites whatever was there; there is one slot, no history and
/// no versioning.
pub trait SaveStore {
    /// Load the saved record, or `None` if nothing has been saved yet.
    fn load(&self) -> Result<Option<CombatantRecord>>;

    /// Replace the saved record.
    fn save(&self, record: &CombatantRecord) -> Result<()>;
}
