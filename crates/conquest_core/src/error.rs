//! Error types for the territory and mission registries.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::mission::MissionId;
use crate::territory::TerritoryId;

/// Result type alias using [`WarError`].
pub type Result<T> = std::result::Result<T, WarError>;

/// Top-level error type for all registry and combat errors.
#[derive(Debug, Error)]
pub enum WarError {
    /// Storage for text or a sequence could not be allocated.
    #[error("Out of memory while {context}")]
    ResourceExhausted {
        /// What the registry was doing when allocation failed.
        context: &'static str,
        /// Underlying allocator error, if one was reported.
        #[source]
        source: Option<TryReserveError>,
    },

    /// Territory identifier does not belong to the registry.
    #[error("Territory not found: {0}")]
    TerritoryNotFound(TerritoryId),

    /// Mission identifier does not belong to the registry.
    #[error("Mission not found: {0}")]
    MissionNotFound(MissionId),

    /// Combat was requested between a territory and itself.
    #[error("Territory {0} cannot fight itself")]
    SelfCombat(TerritoryId),
}

impl WarError {
    /// Wrap an allocator failure with the operation that triggered it.
    #[must_use]
    pub const fn exhausted(context: &'static str, source: TryReserveError) -> Self {
        Self::ResourceExhausted {
            context,
            source: Some(source),
        }
    }

    /// Identifier space ran out; no allocator error is involved.
    #[must_use]
    pub const fn capacity(context: &'static str) -> Self {
        Self::ResourceExhausted {
            context,
            source: None,
        }
    }
}

/// Copy `text` into a freshly allocated `String`, reporting allocation failure.
pub(crate) fn owned_text(text: &str, context: &'static str) -> Result<String> {
    let mut owned = String::new();
    owned
        .try_reserve_exact(text.len())
        .map_err(|e| WarError::exhausted(context, e))?;
    owned.push_str(text);
    Ok(owned)
}
