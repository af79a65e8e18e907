//! Encounter errors.

use super::resolver::EncounterState;

/// Errors from submitting a turn.
///
/// Neither is fatal: the encounter is left exactly as it was and the caller
/// decides what to do next.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncounterError {
    /// Input that isn't one of the known actions. Ask the player again.
    #[error("invalid action {0:?}: choose attack, inspect or retreat")]
    InvalidAction(String),

    /// The encounter already reached a terminal state.
    #[error("encounter already ended ({0})")]
    AlreadyResolved(EncounterState),
}

impl EncounterError {
    /// Check if re-prompting the player can fix this.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, EncounterError::InvalidAction(_))
    }
}
