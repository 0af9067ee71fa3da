//! Aggregate owning both registries for one game.
//!
//! # Example
//!
//! ```
//! use conquest_core::campaign::Campaign;
//! use conquest_core::combat::AttackReport;
//! use conquest_core::dice::ScriptedDice;
//! use conquest_core::player::PlayerId;
//!
//! let mut campaign = Campaign::new();
//! let board = campaign.territories_mut();
//! let home = board.create_territory("Home", PlayerId::new(1), 3).unwrap();
//! let away = board.create_territory("Away", PlayerId::new(2), 1).unwrap();
//! board.connect(home, away).unwrap();
//!
//! let report = campaign
//!     .attack(home, away, PlayerId::new(1), &mut ScriptedDice::new([6, 1]))
//!     .unwrap();
//! assert!(matches!(report, AttackReport::Resolved(_)));
//!
//! let summary = campaign.release();
//! assert_eq!(summary.territories, 2);
//! ```

use crate::combat::{try_attack, AttackReport};
use crate::dice::DiceRoller;
use crate::error::Result;
use crate::lifecycle::{release_all, ReleaseSummary};
use crate::mission::MissionRegistry;
use crate::player::PlayerId;
use crate::territory::{TerritoryId, TerritoryRegistry};

/// Owns the territory and mission registries of a single game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Campaign {
    territories: TerritoryRegistry,
    missions: MissionRegistry,
}

impl Campaign {
    /// Create a campaign with empty registries.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a campaign from registries built elsewhere.
    #[must_use]
    pub const fn from_registries(
        territories: TerritoryRegistry,
        missions: MissionRegistry,
    ) -> Self {
        Self {
            territories,
            missions,
        }
    }

    /// The territory graph.
    #[must_use]
    pub const fn territories(&self) -> &TerritoryRegistry {
        &self.territories
    }

    /// Mutable access for building the territory graph.
    pub fn territories_mut(&mut self) -> &mut TerritoryRegistry {
        &mut self.territories
    }

    /// The mission list.
    #[must_use]
    pub const fn missions(&self) -> &MissionRegistry {
        &self.missions
    }

    /// Mutable access for adding missions.
    pub fn missions_mut(&mut self) -> &mut MissionRegistry {
        &mut self.missions
    }

    /// Validate and resolve one attack. See [`try_attack`].
    ///
    /// # Errors
    ///
    /// Same as [`try_attack`].
    pub fn attack<D: DiceRoller + ?Sized>(
        &mut self,
        from: TerritoryId,
        to: TerritoryId,
        player: PlayerId,
        dice: &mut D,
    ) -> Result<AttackReport> {
        try_attack(&mut self.territories, from, to, player, dice)
    }

    /// Tear the campaign down. Consumes `self`.
    pub fn release(self) -> ReleaseSummary {
        release_all(Some(self.territories), Some(self.missions))
    }
}
