//! Test fixtures and helpers.
//!
//! Pre-built boards and dice for consistent testing.

use conquest_core::dice::ScriptedDice;
use conquest_core::mission::MissionRegistry;
use conquest_core::player::PlayerId;
use conquest_core::territory::{TerritoryId, TerritoryRegistry};

/// First player.
pub const RED: PlayerId = PlayerId(1);

/// Second player.
pub const BLUE: PlayerId = PlayerId(2);

/// The three-territory frontier board.
///
/// Amazônia (red, 5) <-> Sertão (blue, 3) <-> Litoral (neutral, 2).
#[derive(Debug, Clone)]
pub struct Frontier {
    /// Owning registry.
    pub registry: TerritoryRegistry,
    /// Red's territory.
    pub amazonia: TerritoryId,
    /// Blue's territory, bordering both others.
    pub sertao: TerritoryId,
    /// Neutral territory.
    pub litoral: TerritoryId,
}

/// Build the frontier board.
///
/// # Panics
///
/// Panics if allocation fails (tests only).
#[must_use]
pub fn frontier() -> Frontier {
    let mut registry = TerritoryRegistry::new();
    let amazonia = registry
        .create_territory("Amazônia", RED, 5)
        .expect("create Amazônia");
    let sertao = registry
        .create_territory("Sertão", BLUE, 3)
        .expect("create Sertão");
    let litoral = registry
        .create_territory("Litoral", PlayerId::NEUTRAL, 2)
        .expect("create Litoral");
    registry.connect(amazonia, sertao).expect("connect");
    registry.connect(sertao, litoral).expect("connect");
    Frontier {
        registry,
        amazonia,
        sertao,
        litoral,
    }
}

/// The two missions that ship with the frontier board.
///
/// # Panics
///
/// Panics if allocation fails (tests only).
#[must_use]
pub fn frontier_missions() -> MissionRegistry {
    let mut missions = MissionRegistry::new();
    missions
        .create_mission("Conquistar 3 territórios da região Norte", PlayerId::NEUTRAL)
        .expect("create mission");
    missions
        .create_mission("Eliminar jogador 2", BLUE)
        .expect("create mission");
    missions
}

/// Two bordering territories: red attacker and blue defender.
///
/// # Panics
///
/// Panics if allocation fails (tests only).
#[must_use]
pub fn duel(attackers: u32, defenders: u32) -> (TerritoryRegistry, TerritoryId, TerritoryId) {
    let mut registry = TerritoryRegistry::new();
    let from = registry
        .create_territory("Attacker", RED, attackers)
        .expect("create attacker");
    let to = registry
        .create_territory("Defender", BLUE, defenders)
        .expect("create defender");
    registry.add_neighbor(from, to).expect("add neighbor");
    (registry, from, to)
}

/// Dice where the attacker always rolls 6 and the defender 1.
#[must_use]
pub fn attacker_wins() -> ScriptedDice {
    ScriptedDice::new([6, 1])
}

/// Dice where the defender always wins the roll.
#[must_use]
pub fn defender_wins() -> ScriptedDice {
    ScriptedDice::new([1, 6])
}
