//! Teardown of territory and mission registries.
//!
//! Releasing takes the registries by value, so once they are handed over no
//! territory, mission or neighbor id can be read through them again, and a
//! second release does not type-check.

use tracing::debug;

use crate::mission::MissionRegistry;
use crate::territory::TerritoryRegistry;

/// Counts of what a release freed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReleaseSummary {
    /// Territory records released.
    pub territories: usize,
    /// Neighbor links dropped (the neighbors themselves are counted once, as territories).
    pub neighbor_links: usize,
    /// Mission records released.
    pub missions: usize,
}

impl ReleaseSummary {
    /// Whether nothing was released.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.territories == 0 && self.missions == 0
    }
}

/// Release both registries and everything they own.
///
/// Each territory drops its name and neighbor list before the record itself;
/// neighbors are released through their own slot, never through a link.
/// Missions drop their description, then the record. Absent registries are
/// skipped.
///
/// # Example
///
/// ```
/// use conquest_core::lifecycle::release_all;
///
/// let summary = release_all(None, None);
/// assert!(summary.is_empty());
/// ```
pub fn release_all(
    territories: Option<TerritoryRegistry>,
    missions: Option<MissionRegistry>,
) -> ReleaseSummary {
    let mut summary = ReleaseSummary::default();

    if let Some(registry) = territories {
        for territory in registry.into_territories() {
            summary.neighbor_links += territory.release();
            summary.territories += 1;
        }
    }

    if let Some(registry) = missions {
        for mission in registry.into_missions() {
            drop(mission);
            summary.missions += 1;
        }
    }

    debug!(
        "Released {} territories ({} neighbor links) and {} missions",
        summary.territories, summary.neighbor_links, summary.missions
    );
    summary
}
