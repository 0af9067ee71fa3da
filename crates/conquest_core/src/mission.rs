//! Strategic mission records.
//!
//! Missions are opaque data: they name a player but are never checked
//! against the territory registry and carry no behavior of their own.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{owned_text, Result, WarError};
use crate::player::PlayerId;

/// Stable identifier of a mission within its registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MissionId(u32);

impl MissionId {
    /// Position of the mission in its registry.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for MissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mission #{}", self.0)
    }
}

/// A strategic objective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mission {
    description: String,
    target_owner: PlayerId,
}

impl Mission {
    /// Human-readable objective.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Player the mission refers to.
    #[must_use]
    pub const fn target_owner(&self) -> PlayerId {
        self.target_owner
    }
}

/// Exclusive owner of all missions in a game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissionRegistry {
    missions: Vec<Mission>,
}

impl MissionRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            missions: Vec::new(),
        }
    }

    /// Create a mission and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`WarError::ResourceExhausted`] if the description or the
    /// registry slot cannot be allocated.
    pub fn create_mission(
        &mut self,
        description: &str,
        target_owner: PlayerId,
    ) -> Result<MissionId> {
        let id = u32::try_from(self.missions.len())
            .map(MissionId)
            .map_err(|_| WarError::capacity("assigning a mission id"))?;
        let description = owned_text(description, "copying a mission description")?;
        self.missions
            .try_reserve(1)
            .map_err(|e| WarError::exhausted("growing the mission registry", e))?;

        debug!("Created {id} targeting {target_owner}: {description}");
        self.missions.push(Mission {
            description,
            target_owner,
        });
        Ok(id)
    }

    /// Get a mission by id.
    #[must_use]
    pub fn get(&self, id: MissionId) -> Option<&Mission> {
        self.missions.get(id.index())
    }

    /// Get a mission by id, failing if it is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`WarError::MissionNotFound`] if the id is unknown.
    pub fn mission(&self, id: MissionId) -> Result<&Mission> {
        self.get(id).ok_or(WarError::MissionNotFound(id))
    }

    /// Number of missions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.missions.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }

    /// Iterate over missions in creation order.
    // Ids are only handed out while the length fits in a u32.
    #[allow(clippy::cast_possible_truncation)]
    pub fn iter(&self) -> impl Iterator<Item = (MissionId, &Mission)> {
        self.missions
            .iter()
            .enumerate()
            .map(|(i, m)| (MissionId(i as u32), m))
    }

    /// Missions that reference `player`.
    pub fn targeting(&self, player: PlayerId) -> impl Iterator<Item = MissionId> + '_ {
        self.iter()
            .filter(move |(_, m)| m.target_owner == player)
            .map(|(id, _)| id)
    }

    pub(crate) fn into_missions(self) -> Vec<Mission> {
        self.missions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_mission() {
        let mut missions = MissionRegistry::new();
        let id = missions
            .create_mission("Eliminar jogador 2", PlayerId::new(2))
            .unwrap();

        let mission = missions.get(id).unwrap();
        assert_eq!(mission.description(), "Eliminar jogador 2");
        assert_eq!(mission.target_owner(), PlayerId::new(2));
        assert_eq!(missions.len(), 1);
    }

    #[test]
    fn test_target_owner_is_not_validated() {
        let mut missions = MissionRegistry::new();
        let id = missions
            .create_mission("Hunt a player nobody has heard of", PlayerId::new(42))
            .unwrap();
        assert_eq!(missions.mission(id).unwrap().target_owner(), PlayerId::new(42));
    }

    #[test]
    fn test_targeting() {
        let mut missions = MissionRegistry::new();
        let north = missions
            .create_mission("Conquistar 3 territórios da região Norte", PlayerId::NEUTRAL)
            .unwrap();
        let hunt = missions
            .create_mission("Eliminar jogador 2", PlayerId::new(2))
            .unwrap();

        assert_eq!(missions.targeting(PlayerId::new(2)).collect::<Vec<_>>(), vec![hunt]);
        assert_eq!(
            missions.targeting(PlayerId::NEUTRAL).collect::<Vec<_>>(),
            vec![north]
        );
    }

    #[test]
    fn test_unknown_mission() {
        let missions = MissionRegistry::new();
        assert!(missions.is_empty());
        assert!(matches!(
            missions.mission(MissionId(0)),
            Err(WarError::MissionNotFound(_))
        ));
    }
}
