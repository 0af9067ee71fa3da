//! Attack validation.
//!
//! A pure check run before every combat round. Conditions are evaluated in a
//! fixed order and the first failure is reported:
//!
//! 1. Both territories exist
//! 2. The attacker owns the source territory
//! 3. The target is not the attacker's own territory
//! 4. The source keeps at least one army behind ([`MIN_ATTACKING_ARMIES`])
//! 5. The target is one of the source's neighbors

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::player::PlayerId;
use crate::territory::{TerritoryId, TerritoryRegistry};

/// Armies a territory needs before it may launch an attack.
pub const MIN_ATTACKING_ARMIES: u32 = 2;

/// Why an attack is not allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum AttackRejection {
    /// One of the territories is not in the registry.
    #[error("territory {0} does not exist")]
    MissingTerritory(TerritoryId),
    /// The source territory belongs to someone else.
    #[error("{player} does not own the attacking territory (owner: {owner})")]
    NotOwner {
        /// Player issuing the attack.
        player: PlayerId,
        /// Actual owner of the source territory.
        owner: PlayerId,
    },
    /// The target already belongs to the attacker.
    #[error("{0} cannot attack their own territory")]
    OwnTarget(PlayerId),
    /// Not enough armies to leave one behind.
    #[error("attacking territory has {available} armies, needs at least {}", MIN_ATTACKING_ARMIES)]
    InsufficientArmies {
        /// Armies in the source territory.
        available: u32,
    },
    /// There is no edge from the source to the target.
    #[error("territory {to} is not a neighbor of {from}")]
    NotAdjacent {
        /// Source territory.
        from: TerritoryId,
        /// Target territory.
        to: TerritoryId,
    },
}

/// Check whether `player` may attack `to` from `from`.
///
/// # Errors
///
/// Returns the first [`AttackRejection`] that applies.
pub fn validate_attack(
    registry: &TerritoryRegistry,
    from: TerritoryId,
    to: TerritoryId,
    player: PlayerId,
) -> Result<(), AttackRejection> {
    let source = registry
        .get(from)
        .ok_or(AttackRejection::MissingTerritory(from))?;
    let target = registry
        .get(to)
        .ok_or(AttackRejection::MissingTerritory(to))?;

    if source.owner() != player {
        return Err(AttackRejection::NotOwner {
            player,
            owner: source.owner(),
        });
    }
    if target.owner() == player {
        return Err(AttackRejection::OwnTarget(player));
    }
    if source.armies() < MIN_ATTACKING_ARMIES {
        return Err(AttackRejection::InsufficientArmies {
            available: source.armies(),
        });
    }
    if !source.is_adjacent_to(to) {
        return Err(AttackRejection::NotAdjacent { from, to });
    }
    Ok(())
}

/// Boolean form of [`validate_attack`].
#[must_use]
pub fn can_attack(
    registry: &TerritoryRegistry,
    from: TerritoryId,
    to: TerritoryId,
    player: PlayerId,
) -> bool {
    validate_attack(registry, from, to, player).is_ok()
}

/// Neighbors of `from` that `player` could attack right now.
#[must_use]
pub fn attackable_targets(
    registry: &TerritoryRegistry,
    from: TerritoryId,
    player: PlayerId,
) -> Vec<TerritoryId> {
    let Some(source) = registry.get(from) else {
        return Vec::new();
    };
    let mut targets = Vec::new();
    for &to in source.neighbors() {
        if !targets.contains(&to) && can_attack(registry, from, to, player) {
            targets.push(to);
        }
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::*;

    const P1: PlayerId = PlayerId(1);
    const P2: PlayerId = PlayerId(2);

    struct Board {
        registry: TerritoryRegistry,
        amazonia: TerritoryId,
        sertao: TerritoryId,
        litoral: TerritoryId,
    }

    fn board() -> Board {
        let mut registry = TerritoryRegistry::new();
        let amazonia = registry.create_territory("Amazônia", P1, 5).unwrap();
        let sertao = registry.create_territory("Sertão", P2, 3).unwrap();
        let litoral = registry
            .create_territory("Litoral", PlayerId::NEUTRAL, 2)
            .unwrap();
        registry.connect(amazonia, sertao).unwrap();
        registry.connect(sertao, litoral).unwrap();
        Board {
            registry,
            amazonia,
            sertao,
            litoral,
        }
    }

    #[test]
    fn test_valid_attack() {
        let b = board();
        assert!(can_attack(&b.registry, b.amazonia, b.sertao, P1));
        assert_eq!(validate_attack(&b.registry, b.amazonia, b.sertao, P1), Ok(()));
    }

    #[test]
    fn test_must_own_source() {
        let b = board();
        assert_eq!(
            validate_attack(&b.registry, b.amazonia, b.sertao, P2),
            Err(AttackRejection::NotOwner {
                player: P2,
                owner: P1
            })
        );
    }

    #[test]
    fn test_cannot_attack_own_territory() {
        let mut b = board();
        let colony = b.registry.create_territory("Colônia", P1, 1).unwrap();
        b.registry.add_neighbor(b.amazonia, colony).unwrap();

        assert_eq!(
            validate_attack(&b.registry, b.amazonia, colony, P1),
            Err(AttackRejection::OwnTarget(P1))
        );
    }

    #[test]
    fn test_needs_two_armies() {
        let mut b = board();
        let outpost = b.registry.create_territory("Posto", P1, 1).unwrap();
        b.registry.add_neighbor(outpost, b.sertao).unwrap();

        assert_eq!(
            validate_attack(&b.registry, outpost, b.sertao, P1),
            Err(AttackRejection::InsufficientArmies { available: 1 })
        );
    }

    #[test]
    fn test_requires_adjacency() {
        let b = board();
        assert_eq!(
            validate_attack(&b.registry, b.amazonia, b.litoral, P1),
            Err(AttackRejection::NotAdjacent {
                from: b.amazonia,
                to: b.litoral
            })
        );
    }

    #[test]
    fn test_adjacency_is_directed() {
        let mut registry = TerritoryRegistry::new();
        let a = registry.create_territory("A", P1, 4).unwrap();
        let b = registry.create_territory("B", P2, 4).unwrap();
        registry.add_neighbor(b, a).unwrap();

        assert!(!can_attack(&registry, a, b, P1));
        assert!(can_attack(&registry, b, a, P2));
    }

    #[test]
    fn test_missing_territory() {
        let b = board();
        let other = {
            let mut bigger = TerritoryRegistry::new();
            for name in ["a", "b", "c", "d"] {
                bigger.create_territory(name, P2, 1).unwrap();
            }
            bigger.ids().last().unwrap()
        };
        assert_eq!(
            validate_attack(&b.registry, b.amazonia, other, P1),
            Err(AttackRejection::MissingTerritory(other))
        );
        assert!(!can_attack(&b.registry, other, b.amazonia, P1));
    }

    #[test]
    fn test_attackable_targets() {
        let b = board();
        assert_eq!(
            attackable_targets(&b.registry, b.amazonia, P1),
            vec![b.sertao]
        );
        assert_eq!(
            attackable_targets(&b.registry, b.sertao, P2),
            vec![b.amazonia, b.litoral]
        );
        assert!(attackable_targets(&b.registry, b.litoral, P1).is_empty());
    }
}
