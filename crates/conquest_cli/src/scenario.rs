//! Scenario loading and configuration.
//!
//! Scenarios define the board for a console run: territories, roads,
//! missions and the single attack to resolve.

use std::path::Path;

use conquest_core::campaign::Campaign;
use conquest_core::error::WarError;
use conquest_core::player::PlayerId;
use conquest_core::territory::{TerritoryId, TerritoryRegistry};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Error type for scenario operations.
#[derive(Error, Debug)]
pub enum ScenarioError {
    /// File not found.
    #[error("Scenario file not found: {0}")]
    FileNotFound(String),
    /// Failed to read file.
    #[error("Failed to read scenario file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse RON.
    #[error("Failed to parse scenario: {0}")]
    ParseError(#[from] ron::error::SpannedError),
    /// A road or attack names a territory the scenario does not define.
    #[error("Scenario references unknown territory '{0}'")]
    UnknownTerritory(String),
    /// Building the registries failed.
    #[error("Failed to build scenario: {0}")]
    Build(#[from] WarError),
}

/// Starting state of one territory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TerritorySetup {
    /// Territory name, unique within the scenario.
    pub name: String,
    /// Starting owner (`0` = neutral).
    pub owner: PlayerId,
    /// Starting armies.
    pub armies: u32,
}

impl TerritorySetup {
    /// Create a territory setup.
    pub fn new(name: &str, owner: u32, armies: u32) -> Self {
        Self {
            name: name.to_string(),
            owner: PlayerId::new(owner),
            armies,
        }
    }
}

/// A road between two territories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Road {
    /// Source territory name.
    pub from: String,
    /// Destination territory name.
    pub to: String,
    /// Adds `to -> from` as well. Defaults to `true`; when `false` only
    /// `from -> to` is added.
    #[serde(default = "default_bidirectional")]
    pub bidirectional: bool,
}

fn default_bidirectional() -> bool {
    true
}

impl Road {
    /// Create a two-way road.
    pub fn two_way(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            bidirectional: true,
        }
    }
}

/// A mission to register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MissionSetup {
    /// Objective text.
    pub description: String,
    /// Player the mission refers to.
    pub target_owner: PlayerId,
}

/// The attack a run resolves, by territory name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttackOrder {
    /// Attacking player.
    pub player: PlayerId,
    /// Attacking territory.
    pub from: String,
    /// Target territory.
    pub to: String,
}

/// An [`AttackOrder`] resolved against a built board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedAttack {
    /// Attacking player.
    pub player: PlayerId,
    /// Attacking territory.
    pub from: TerritoryId,
    /// Target territory.
    pub to: TerritoryId,
}

/// A complete scenario configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Scenario name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Territories in creation order.
    pub territories: Vec<TerritorySetup>,
    /// Adjacency.
    #[serde(default)]
    pub roads: Vec<Road>,
    /// Missions in creation order.
    #[serde(default)]
    pub missions: Vec<MissionSetup>,
    /// The attack to resolve.
    pub attack: AttackOrder,
}

impl Default for Scenario {
    fn default() -> Self {
        Self::frontier()
    }
}

impl Scenario {
    /// Load a scenario from a RON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ScenarioError::FileNotFound(path.display().to_string()));
        }
        let contents = std::fs::read_to_string(path)?;
        let scenario: Scenario = ron::from_str(&contents)?;
        Ok(scenario)
    }

    /// Load from a RON string (useful for embedded scenarios).
    pub fn from_ron_str(ron: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = ron::from_str(ron)?;
        Ok(scenario)
    }

    /// Three territories on a line, red attacking blue across the first road.
    #[must_use]
    pub fn frontier() -> Self {
        Self {
            name: "Frontier".to_string(),
            description: "Amazônia strikes Sertão; Litoral waits on the coast".to_string(),
            territories: vec![
                TerritorySetup::new("Amazônia", 1, 5),
                TerritorySetup::new("Sertão", 2, 3),
                TerritorySetup::new("Litoral", 0, 2),
            ],
            roads: vec![
                Road::two_way("Amazônia", "Sertão"),
                Road::two_way("Sertão", "Litoral"),
            ],
            missions: vec![
                MissionSetup {
                    description: "Conquistar 3 territórios da região Norte".to_string(),
                    target_owner: PlayerId::NEUTRAL,
                },
                MissionSetup {
                    description: "Eliminar jogador 2".to_string(),
                    target_owner: PlayerId::new(2),
                },
            ],
            attack: AttackOrder {
                player: PlayerId::new(1),
                from: "Amazônia".to_string(),
                to: "Sertão".to_string(),
            },
        }
    }

    /// Create the registries and resolve the attack order against them.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::UnknownTerritory`] if a road or the attack
    /// names a territory that is not defined, or [`ScenarioError::Build`] if
    /// the core rejects the setup.
    pub fn build(&self) -> Result<(Campaign, PlannedAttack), ScenarioError> {
        let mut campaign = Campaign::new();

        let board = campaign.territories_mut();
        for setup in &self.territories {
            board.create_territory(&setup.name, setup.owner, setup.armies)?;
        }
        for road in &self.roads {
            let from = lookup(board, &road.from)?;
            let to = lookup(board, &road.to)?;
            if road.bidirectional {
                board.connect(from, to)?;
            } else {
                board.add_neighbor(from, to)?;
            }
        }

        let missions = campaign.missions_mut();
        for setup in &self.missions {
            missions.create_mission(&setup.description, setup.target_owner)?;
        }

        let attack = PlannedAttack {
            player: self.attack.player,
            from: lookup(campaign.territories(), &self.attack.from)?,
            to: lookup(campaign.territories(), &self.attack.to)?,
        };

        debug!(
            "Built scenario '{}': {} territories, {} roads, {} missions",
            self.name,
            self.territories.len(),
            self.roads.len(),
            self.missions.len()
        );
        Ok((campaign, attack))
    }
}

fn lookup(board: &TerritoryRegistry, name: &str) -> Result<TerritoryId, ScenarioError> {
    board
        .find_by_name(name)
        .ok_or_else(|| ScenarioError::UnknownTerritory(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontier_builds() {
        let (campaign, attack) = Scenario::frontier().build().unwrap();
        let board = campaign.territories();

        assert_eq!(board.len(), 3);
        assert_eq!(campaign.missions().len(), 2);
        assert_eq!(attack.player, PlayerId::new(1));
        assert_eq!(board.get(attack.from).unwrap().name(), "Amazônia");
        assert_eq!(board.get(attack.to).unwrap().name(), "Sertão");
        assert!(board.get(attack.to).unwrap().is_adjacent_to(attack.from));
    }

    #[test]
    fn test_one_way_road() {
        let mut scenario = Scenario::frontier();
        scenario.roads = vec![Road {
            from: "Sertão".to_string(),
            to: "Amazônia".to_string(),
            bidirectional: false,
        }];
        let (campaign, attack) = scenario.build().unwrap();
        let board = campaign.territories();

        assert!(board.get(attack.to).unwrap().is_adjacent_to(attack.from));
        assert!(board.get(attack.from).unwrap().neighbors().is_empty());
    }

    #[test]
    fn test_unknown_road_endpoint() {
        let mut scenario = Scenario::frontier();
        scenario.roads.push(Road::two_way("Litoral", "Pantanal"));

        assert!(matches!(
            scenario.build(),
            Err(ScenarioError::UnknownTerritory(name)) if name == "Pantanal"
        ));
    }

    #[test]
    fn test_unknown_attack_target() {
        let mut scenario = Scenario::frontier();
        scenario.attack.to = "Pampa".to_string();
        assert!(matches!(
            scenario.build(),
            Err(ScenarioError::UnknownTerritory(_))
        ));
    }

    #[test]
    fn test_ron_defaults() {
        let scenario = Scenario::from_ron_str(
            r#"(
                name: "Bare",
                description: "No roads",
                territories: [(name: "A", owner: 1, armies: 2), (name: "B", owner: 2, armies: 1)],
                attack: (player: 1, from: "A", to: "B"),
            )"#,
        )
        .unwrap();

        assert!(scenario.roads.is_empty());
        assert!(scenario.missions.is_empty());
        assert_eq!(scenario.territories[1].owner, PlayerId::new(2));
    }

    #[test]
    fn test_ron_one_way_road_adds_single_edge() {
        let scenario = Scenario::from_ron_str(
            r#"(
                name: "Ford",
                description: "One-way crossing",
                territories: [(name: "A", owner: 1, armies: 3), (name: "B", owner: 2, armies: 1)],
                roads: [(from: "A", to: "B", bidirectional: false)],
                attack: (player: 1, from: "A", to: "B"),
            )"#,
        )
        .unwrap();
        assert!(!scenario.roads[0].bidirectional);

        let (campaign, attack) = scenario.build().unwrap();
        let board = campaign.territories();

        assert_eq!(board.get(attack.from).unwrap().neighbors(), &[attack.to]);
        assert!(board.get(attack.to).unwrap().neighbors().is_empty());
        assert!(!board.get(attack.to).unwrap().is_adjacent_to(attack.from));
    }

    #[test]
    fn test_ron_road_defaults_to_bidirectional() {
        let scenario = Scenario::from_ron_str(
            r#"(
                name: "Bridge",
                description: "Two-way crossing",
                territories: [(name: "A", owner: 1, armies: 3), (name: "B", owner: 2, armies: 1)],
                roads: [(from: "A", to: "B")],
                attack: (player: 1, from: "A", to: "B"),
            )"#,
        )
        .unwrap();
        assert!(scenario.roads[0].bidirectional);

        let (campaign, attack) = scenario.build().unwrap();
        let board = campaign.territories();

        assert_eq!(board.get(attack.from).unwrap().neighbors(), &[attack.to]);
        assert_eq!(board.get(attack.to).unwrap().neighbors(), &[attack.from]);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = Scenario::from_ron_str(
            r#"(
                name: "Ford",
                description: "Misspelled flag",
                territories: [(name: "A", owner: 1, armies: 3), (name: "B", owner: 2, armies: 1)],
                roads: [(from: "A", to: "B", one_way: true)],
                attack: (player: 1, from: "A", to: "B"),
            )"#,
        );
        assert!(matches!(result, Err(ScenarioError::ParseError(_))));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            Scenario::from_ron_str("(name: )"),
            Err(ScenarioError::ParseError(_))
        ));
    }
}
