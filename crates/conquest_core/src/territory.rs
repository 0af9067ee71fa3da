//! Territory entities and the registry that owns them.
//!
//! The registry is an indexed store: it hands out [`TerritoryId`]s and is the
//! only owner of every [`Territory`]. Neighbor links are plain ids into the
//! same registry, so a territory never owns the territories it borders.
//!
//! # Adjacency
//!
//! Edges are directed. [`TerritoryRegistry::add_neighbor`] appends a single
//! "can attack across" edge and never mirrors it; a two-way road needs either
//! two calls or [`TerritoryRegistry::connect`].
//!
//! # Example
//!
//! ```
//! use conquest_core::player::PlayerId;
//! use conquest_core::territory::TerritoryRegistry;
//!
//! let mut board = TerritoryRegistry::new();
//! let north = board.create_territory("North", PlayerId::new(1), 4).unwrap();
//! let south = board.create_territory("South", PlayerId::new(2), 2).unwrap();
//! board.add_neighbor(north, south).unwrap();
//!
//! assert!(board.get(north).unwrap().is_adjacent_to(south));
//! assert!(!board.get(south).unwrap().is_adjacent_to(north));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{owned_text, Result, WarError};
use crate::player::PlayerId;

/// Stable identifier of a territory within its registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TerritoryId(u32);

impl TerritoryId {
    /// Position of the territory in its registry.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TerritoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node of the ownership graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Territory {
    name: String,
    owner: PlayerId,
    armies: u32,
    neighbors: Vec<TerritoryId>,
}

impl Territory {
    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current owner.
    #[must_use]
    pub const fn owner(&self) -> PlayerId {
        self.owner
    }

    /// Armies stationed here.
    #[must_use]
    pub const fn armies(&self) -> u32 {
        self.armies
    }

    /// Outgoing edges, in insertion order.
    #[must_use]
    pub fn neighbors(&self) -> &[TerritoryId] {
        &self.neighbors
    }

    /// Whether `other` is reachable over one of this territory's edges.
    #[must_use]
    pub fn is_adjacent_to(&self, other: TerritoryId) -> bool {
        self.neighbors.iter().any(|&n| n == other)
    }

    pub(crate) fn set_owner(&mut self, owner: PlayerId) {
        self.owner = owner;
    }

    pub(crate) fn set_armies(&mut self, armies: u32) {
        self.armies = armies;
    }

    /// Drop owned text and the edge list, returning how many edges it held.
    pub(crate) fn release(self) -> usize {
        let Self {
            name, neighbors, ..
        } = self;
        let links = neighbors.len();
        drop(name);
        drop(neighbors);
        links
    }
}

/// Exclusive owner of all territories in a game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerritoryRegistry {
    territories: Vec<Territory>,
}

impl TerritoryRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            territories: Vec::new(),
        }
    }

    /// Create a territory with no neighbors and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`WarError::ResourceExhausted`] if the name or the registry
    /// slot cannot be allocated.
    pub fn create_territory(
        &mut self,
        name: &str,
        owner: PlayerId,
        armies: u32,
    ) -> Result<TerritoryId> {
        let id = u32::try_from(self.territories.len())
            .map(TerritoryId)
            .map_err(|_| WarError::capacity("assigning a territory id"))?;
        let name = owned_text(name, "copying a territory name")?;
        self.territories
            .try_reserve(1)
            .map_err(|e| WarError::exhausted("growing the territory registry", e))?;

        debug!("Created territory {id} '{name}' owned by {owner} with {armies} armies");
        self.territories.push(Territory {
            name,
            owner,
            armies,
            neighbors: Vec::new(),
        });
        Ok(id)
    }

    /// Append a directed edge `territory -> neighbor`.
    ///
    /// Does not touch `neighbor`'s own list and does not check for an existing
    /// edge.
    ///
    /// # Errors
    ///
    /// Returns [`WarError::TerritoryNotFound`] if either id is unknown, or
    /// [`WarError::ResourceExhausted`] if the edge list cannot grow.
    pub fn add_neighbor(&mut self, territory: TerritoryId, neighbor: TerritoryId) -> Result<()> {
        self.index_of(neighbor)?;
        let index = self.index_of(territory)?;
        let source = &mut self.territories[index];
        source
            .neighbors
            .try_reserve(1)
            .map_err(|e| WarError::exhausted("growing a neighbor list", e))?;
        source.neighbors.push(neighbor);

        debug!("Added edge {territory} -> {neighbor}");
        Ok(())
    }

    /// Insert both `a -> b` and `b -> a`.
    ///
    /// Either both edges are added or neither is.
    ///
    /// # Errors
    ///
    /// Same as [`add_neighbor`](Self::add_neighbor).
    pub fn connect(&mut self, a: TerritoryId, b: TerritoryId) -> Result<()> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        for index in [ia, ib] {
            self.territories[index]
                .neighbors
                .try_reserve(2)
                .map_err(|e| WarError::exhausted("growing a neighbor list", e))?;
        }
        self.territories[ia].neighbors.push(b);
        self.territories[ib].neighbors.push(a);

        debug!("Connected {a} <-> {b}");
        Ok(())
    }

    /// Get a territory by id.
    #[must_use]
    pub fn get(&self, id: TerritoryId) -> Option<&Territory> {
        self.territories.get(id.index())
    }

    /// Get a territory by id, failing if it is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`WarError::TerritoryNotFound`] if the id is unknown.
    pub fn territory(&self, id: TerritoryId) -> Result<&Territory> {
        self.get(id).ok_or(WarError::TerritoryNotFound(id))
    }

    /// Look up the first territory with the given name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<TerritoryId> {
        self.iter().find(|(_, t)| t.name == name).map(|(id, _)| id)
    }

    /// Number of territories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.territories.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    /// All ids in creation order.
    pub fn ids(&self) -> impl Iterator<Item = TerritoryId> + '_ {
        self.iter().map(|(id, _)| id)
    }

    /// Iterate over territories in creation order.
    // Ids are only handed out while the length fits in a u32.
    #[allow(clippy::cast_possible_truncation)]
    pub fn iter(&self) -> impl Iterator<Item = (TerritoryId, &Territory)> {
        self.territories
            .iter()
            .enumerate()
            .map(|(i, t)| (TerritoryId(i as u32), t))
    }

    /// Territories currently held by `player`.
    pub fn owned_by(&self, player: PlayerId) -> impl Iterator<Item = TerritoryId> + '_ {
        self.iter()
            .filter(move |(_, t)| t.owner == player)
            .map(|(id, _)| id)
    }

    /// Borrow two distinct territories mutably at once.
    pub(crate) fn pair_mut(
        &mut self,
        a: TerritoryId,
        b: TerritoryId,
    ) -> Result<(&mut Territory, &mut Territory)> {
        if a == b {
            return Err(WarError::SelfCombat(a));
        }
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        if ia < ib {
            let (left, right) = self.territories.split_at_mut(ib);
            Ok((&mut left[ia], &mut right[0]))
        } else {
            let (left, right) = self.territories.split_at_mut(ia);
            Ok((&mut right[0], &mut left[ib]))
        }
    }

    pub(crate) fn into_territories(self) -> Vec<Territory> {
        self.territories
    }

    fn index_of(&self, id: TerritoryId) -> Result<usize> {
        if id.index() < self.territories.len() {
            Ok(id.index())
        } else {
            Err(WarError::TerritoryNotFound(id))
        }
    }
}
