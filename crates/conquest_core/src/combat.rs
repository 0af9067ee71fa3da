//! Single-round combat resolution.
//!
//! Each call exchanges exactly one army:
//!
//! - Attacker and defender each roll one die
//! - Attacker wins only on a strictly higher roll (ties go to the defender)
//! - The loser of the roll loses one army
//! - A defender left with no armies is conquered: ownership passes to the
//!   attacker, who moves one army in
//!
//! Longer battles are built by calling [`resolve_combat`] repeatedly.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::attack::{validate_attack, AttackRejection};
use crate::dice::DiceRoller;
use crate::error::Result;
use crate::player::PlayerId;
use crate::territory::{Territory, TerritoryId, TerritoryRegistry};

/// The two dice of a combat round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombatRolls {
    /// Attacker's die.
    pub attack: u8,
    /// Defender's die.
    pub defend: u8,
}

impl CombatRolls {
    /// Attacker wins only on a strictly higher roll.
    #[must_use]
    pub const fn attacker_wins(self) -> bool {
        self.attack > self.defend
    }
}

/// What a combat round did to the two territories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatResult {
    /// Defender lost one army and still holds the territory.
    DefenderLostArmy {
        /// Armies left in the defending territory.
        remaining: u32,
    },
    /// Defender was wiped out and the territory changed hands.
    Conquered {
        /// The attacker, now owning the target.
        new_owner: PlayerId,
    },
    /// Attacker lost one army.
    AttackerLostArmy {
        /// Armies left in the attacking territory.
        remaining: u32,
    },
}

/// Full record of one combat round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombatOutcome {
    /// Attacking territory.
    pub from: TerritoryId,
    /// Defending territory.
    pub to: TerritoryId,
    /// Dice that decided the round.
    pub rolls: CombatRolls,
    /// State change applied.
    pub result: CombatResult,
}

/// Result of [`try_attack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackReport {
    /// Validation failed; nothing changed and no dice were rolled.
    Rejected(AttackRejection),
    /// Combat was resolved.
    Resolved(CombatOutcome),
}

/// Resolve one combat round from `from` against `to`.
///
/// Callers are expected to have checked [`can_attack`](crate::attack::can_attack)
/// first; attack rules are not re-checked here.
///
/// # Errors
///
/// Returns [`WarError::TerritoryNotFound`](crate::error::WarError::TerritoryNotFound)
/// if either id is unknown, or
/// [`WarError::SelfCombat`](crate::error::WarError::SelfCombat) if `from == to`.
/// No dice are rolled on error.
pub fn resolve_combat<D: DiceRoller + ?Sized>(
    registry: &mut TerritoryRegistry,
    from: TerritoryId,
    to: TerritoryId,
    dice: &mut D,
) -> Result<CombatOutcome> {
    let (attacker, defender) = registry.pair_mut(from, to)?;

    let rolls = CombatRolls {
        attack: dice.roll_d6(),
        defend: dice.roll_d6(),
    };
    info!("Attack roll: {} | defense roll: {}", rolls.attack, rolls.defend);

    let result = apply_rolls(attacker, defender, rolls);
    match result {
        CombatResult::Conquered { new_owner } => {
            info!("Territory {} conquered by {new_owner}!", defender.name());
        }
        CombatResult::DefenderLostArmy { remaining } => {
            info!("{} loses 1 army ({remaining} left)", defender.name());
        }
        CombatResult::AttackerLostArmy { remaining } => {
            info!("{} loses 1 army ({remaining} left)", attacker.name());
        }
    }

    Ok(CombatOutcome {
        from,
        to,
        rolls,
        result,
    })
}

/// Validate an attack and, if allowed, resolve one combat round.
///
/// # Errors
///
/// Same as [`resolve_combat`]. A failed validation is not an error; it is
/// reported as [`AttackReport::Rejected`].
pub fn try_attack<D: DiceRoller + ?Sized>(
    registry: &mut TerritoryRegistry,
    from: TerritoryId,
    to: TerritoryId,
    player: PlayerId,
    dice: &mut D,
) -> Result<AttackReport> {
    if let Err(reason) = validate_attack(registry, from, to, player) {
        info!("Attack from {from} to {to} by {player} rejected: {reason}");
        return Ok(AttackReport::Rejected(reason));
    }
    resolve_combat(registry, from, to, dice).map(AttackReport::Resolved)
}

/// Apply the outcome of `rolls`.
///
/// The defender's decrement and the conquest clamp are computed together, so
/// no territory is ever left holding a negative or zero army count.
fn apply_rolls(
    attacker: &mut Territory,
    defender: &mut Territory,
    rolls: CombatRolls,
) -> CombatResult {
    if !rolls.attacker_wins() {
        let remaining = attacker.armies().saturating_sub(1);
        attacker.set_armies(remaining);
        return CombatResult::AttackerLostArmy { remaining };
    }

    match defender.armies().checked_sub(1) {
        Some(remaining) if remaining > 0 => {
            defender.set_armies(remaining);
            CombatResult::DefenderLostArmy { remaining }
        }
        _ => {
            let new_owner = attacker.owner();
            defender.set_owner(new_owner);
            defender.set_armies(1);
            attacker.set_armies(attacker.armies().saturating_sub(1));
            CombatResult::Conquered { new_owner }
        }
    }
}
