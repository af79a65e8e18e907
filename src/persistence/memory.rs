//! In-memory save store.

use std::sync::RwLock;

use super::error::{Result, StoreError};
use super::traits::SaveStore;
use crate::codec::CombatantRecord;

/// Keeps the saved record in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RwLock<Option<CombatantRecord>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `record` already saved.
    #[must_use]
    pub fn with_record(record: CombatantRecord) -> Self {
        Self {
            slot: RwLock::new(Some(record)),
        }
    }
}

impl SaveStore for MemoryStore {
    fn load(&self) -> Result<Option<CombatantRecord>> {
        let slot = self.slot.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(slot.clone())
    }

    fn save(&self, record: &CombatantRecord) -> Result<()> {
        let mut slot = self.slot.write().map_err(|_| StoreError::LockPoisoned)?;
        *slot = Some(record.clone());
        Ok(())
    }
}
