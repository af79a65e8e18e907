//! The flat persisted record and its mapping to [`Combatant`].
//!
//! Every field is optional at the type level so a stored document with a
//! key missing still parses; the gap is reported by [`decode`] as
//! [`MalformedRecord::MissingField`]. Numbers are kept signed and wide for
//! the same reason: a negative or oversized value is a validation error
//! rather than a parse failure.

use serde::{Deserialize, Serialize};

use super::error::MalformedRecord;
use crate::core::Combatant;

/// Persisted form of one creature.
///
/// Field names match the save document: `name`, `level`, `hp`, `atk`,
/// `defense`, `xp`, `max_hp`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atk: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defense: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_hp: Option<i64>,
}

/// Capture every attribute of `combatant`.
#[must_use]
pub fn encode(combatant: &Combatant) -> CombatantRecord {
    CombatantRecord {
        name: Some(combatant.name().to_string()),
        level: Some(i64::from(combatant.level())),
        hp: Some(i64::from(combatant.hp())),
        atk: Some(i64::from(combatant.atk())),
        defense: Some(i64::from(combatant.defense())),
        xp: Some(i64::from(combatant.xp())),
        max_hp: Some(i64::from(combatant.max_hp())),
    }
}

/// Rebuild a creature from a record.
///
/// The result is ready to fight or level immediately. Experience at or above
/// the level-up threshold is kept as stored; the next `gain_xp` settles it.
pub fn decode(record: &CombatantRecord) -> Result<Combatant, MalformedRecord> {
    let name = record
        .name
        .as_deref()
        .ok_or(MalformedRecord::MissingField("name"))?;
    if name.is_empty() {
        return Err(MalformedRecord::out_of_range("name", "must not be empty"));
    }

    let level = field(record.level, "level")?;
    let hp = field(record.hp, "hp")?;
    let atk = field(record.atk, "atk")?;
    let defense = field(record.defense, "defense")?;
    let xp = field(record.xp, "xp")?;
    let max_hp = field(record.max_hp, "max_hp")?;

    if level == 0 {
        return Err(MalformedRecord::out_of_range("level", "must be at least 1"));
    }
    if max_hp == 0 {
        return Err(MalformedRecord::out_of_range("max_hp", "must be at least 1"));
    }
    if hp > max_hp {
        return Err(MalformedRecord::out_of_range(
            "hp",
            format!("{hp} exceeds max_hp {max_hp}"),
        ));
    }

    Ok(Combatant::from_parts(
        name.to_string(),
        level,
        hp,
        max_hp,
        atk,
        defense,
        xp,
    ))
}

fn field(value: Option<i64>, name: &'static str) -> Result<u32, MalformedRecord> {
    let value = value.ok_or(MalformedRecord::MissingField(name))?;
    u32::try_from(value)
        .map_err(|_| MalformedRecord::out_of_range(name, format!("{value} is not a valid stat")))
}

/// Serialize a record as a JSON document.
pub fn to_json(record: &CombatantRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string(record)
}

/// Parse a record from a JSON document. Missing keys are left empty for
/// [`decode`] to report.
pub fn from_json(json: &str) -> Result<CombatantRecord, MalformedRecord> {
    serde_json::from_str(json).map_err(|e| MalformedRecord::Syntax(e.to_string()))
}
