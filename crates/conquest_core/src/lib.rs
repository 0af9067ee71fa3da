//! # Conquest Core
//!
//! Territory graph and combat rules for a small territorial-conquest game.
//!
//! This crate contains **only** game rules:
//! - No rendering
//! - No IO
//! - No hidden randomness (dice are always injected)
//!
//! ## Crate Structure
//!
//! - [`territory`] - Territory entities and the owning registry
//! - [`mission`] - Strategic mission records
//! - [`attack`] - Attack validation
//! - [`combat`] - Single-round combat resolution
//! - [`dice`] - Injectable dice sources
//! - [`lifecycle`] - Teardown of registries
//! - [`campaign`] - Aggregate owning both registries

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod attack;
pub mod campaign;
pub mod combat;
pub mod dice;
pub mod error;
pub mod lifecycle;
pub mod mission;
pub mod player;
pub mod territory;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::attack::{attackable_targets, can_attack, validate_attack, AttackRejection};
    pub use crate::campaign::Campaign;
    pub use crate::combat::{
        resolve_combat, try_attack, AttackReport, CombatOutcome, CombatResult, CombatRolls,
    };
    pub use crate::dice::{DiceRoller, RngDice, ScriptedDice};
    pub use crate::error::{Result, WarError};
    pub use crate::lifecycle::{release_all, ReleaseSummary};
    pub use crate::mission::{Mission, MissionId, MissionRegistry};
    pub use crate::player::PlayerId;
    pub use crate::territory::{Territory, TerritoryId, TerritoryRegistry};
}
