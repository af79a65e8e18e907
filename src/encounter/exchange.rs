//! The attack-and-counter rule shared by every fight.

use serde::{Deserialize, Serialize};

use crate::core::Combatant;

/// How an exchange left the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExchangeOutcome {
    /// Both sides are still standing.
    BothStanding,
    /// The first strike knocked the defender out; there was no counter.
    DefenderFainted,
    /// The defender's counter knocked the attacker out.
    AttackerFainted,
}

/// Result of one exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    /// Damage the attacker dealt.
    pub dealt: u32,
    /// Damage the defender dealt back, if it got to counter.
    pub taken: Option<u32>,
    pub outcome: ExchangeOutcome,
}

/// `attacker` strikes first; `defender` counters only if it survives.
///
/// There's no speed stat and no randomness: the same two creatures always
/// produce the same exchange.
pub fn exchange(attacker: &mut Combatant, defender: &mut Combatant) -> Exchange {
    let dealt = attacker.attack_target(defender);
    if defender.is_fainted() {
        return Exchange {
            dealt,
            taken: None,
            outcome: ExchangeOutcome::DefenderFainted,
        };
    }

    let taken = defender.attack_target(attacker);
    let outcome = if attacker.is_fainted() {
        ExchangeOutcome::AttackerFainted
    } else {
        ExchangeOutcome::BothStanding
    };

    Exchange {
        dealt,
        taken: Some(taken),
        outcome,
    }
}
