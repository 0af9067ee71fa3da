//! Proptest strategies.
//!
//! Random but reproducible inputs for property tests of the attack and
//! combat rules.

use conquest_core::combat::CombatRolls;
use conquest_core::dice::DIE_FACES;
use conquest_core::player::PlayerId;
use conquest_core::territory::{TerritoryId, TerritoryRegistry};
use proptest::prelude::*;

/// Generate a player id, neutral included (0-4).
pub fn arb_player() -> impl Strategy<Value = PlayerId> {
    (0u32..5).prop_map(PlayerId)
}

/// Generate an army count (0-20).
pub fn arb_armies() -> impl Strategy<Value = u32> {
    0u32..=20
}

/// Generate a single die face.
pub fn arb_roll() -> impl Strategy<Value = u8> {
    1u8..=DIE_FACES
}

/// Generate a pair of combat dice.
pub fn arb_rolls() -> impl Strategy<Value = CombatRolls> {
    (arb_roll(), arb_roll()).prop_map(|(attack, defend)| CombatRolls { attack, defend })
}

/// Territory setup for a generated board.
#[derive(Debug, Clone)]
pub struct TerritorySpec {
    /// Owner.
    pub owner: PlayerId,
    /// Armies.
    pub armies: u32,
}

/// Generate one territory setup.
pub fn arb_territory() -> impl Strategy<Value = TerritorySpec> {
    (arb_player(), arb_armies()).prop_map(|(owner, armies)| TerritorySpec { owner, armies })
}

/// A generated board: territories plus directed edges by index.
#[derive(Debug, Clone)]
pub struct BoardSpec {
    /// Territories in creation order.
    pub territories: Vec<TerritorySpec>,
    /// Directed edges as `(from, to)` indices into `territories`.
    pub edges: Vec<(usize, usize)>,
}

impl BoardSpec {
    /// Create the board in a fresh registry, returning ids in creation order.
    ///
    /// # Panics
    ///
    /// Panics if allocation fails (tests only).
    #[must_use]
    pub fn build(&self) -> (TerritoryRegistry, Vec<TerritoryId>) {
        let mut registry = TerritoryRegistry::new();
        let ids: Vec<TerritoryId> = self
            .territories
            .iter()
            .enumerate()
            .map(|(i, t)| {
                registry
                    .create_territory(&format!("T{i}"), t.owner, t.armies)
                    .expect("create territory")
            })
            .collect();
        for &(from, to) in &self.edges {
            registry
                .add_neighbor(ids[from], ids[to])
                .expect("add neighbor");
        }
        (registry, ids)
    }
}

/// Generate a board with 2 to `max_territories` territories and random edges.
pub fn arb_board(max_territories: usize) -> impl Strategy<Value = BoardSpec> {
    let territories = proptest::collection::vec(arb_territory(), 2..max_territories.max(3));
    territories.prop_flat_map(|territories| {
        let n = territories.len();
        let edges = proptest::collection::vec((0..n, 0..n), 0..n * 2);
        (Just(territories), edges)
            .prop_map(|(territories, edges)| BoardSpec { territories, edges })
    })
}
