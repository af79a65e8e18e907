//! Errors raised by save stores.

use thiserror::Error;

use crate::codec::MalformedRecord;

/// Errors surfaced by [`SaveStore`](super::SaveStore) implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("save store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The record could not be written out as JSON.
    #[error("failed to serialize save: {0}")]
    Json(#[from] serde_json::Error),

    /// The stored document exists but isn't a readable record.
    #[error(transparent)]
    Malformed(#[from] MalformedRecord),
}

pub type Result<T> = std::result::Result<T, StoreError>;
