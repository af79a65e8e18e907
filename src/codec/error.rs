//! Codec errors.

/// A persisted record that can't be turned back into a creature.
///
/// Surfaced to the caller, who decides whether to start fresh.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MalformedRecord {
    /// A required field is absent.
    #[error("record is missing field `{0}`")]
    MissingField(&'static str),

    /// A field is present but holds an impossible value.
    #[error("record field `{field}` is out of range: {reason}")]
    OutOfRange { field: &'static str, reason: String },

    /// The stored document isn't a record at all.
    #[error("record could not be parsed: {0}")]
    Syntax(String),
}

impl MalformedRecord {
    pub(crate) fn out_of_range(field: &'static str, reason: impl Into<String>) -> Self {
        MalformedRecord::OutOfRange {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending field, when there is one.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            MalformedRecord::MissingField(field) | MalformedRecord::OutOfRange { field, .. } => {
                Some(*field)
            }
            MalformedRecord::Syntax(_) => None,
        }
    }
}
