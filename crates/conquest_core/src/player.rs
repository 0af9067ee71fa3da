//! Player identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a player.
///
/// `0` is reserved for neutral territory, `1..n` are players.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Owner of territory no player holds.
    pub const NEUTRAL: Self = Self(0);

    /// Create a player identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw numeric identifier.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Whether this is the neutral owner.
    #[must_use]
    pub const fn is_neutral(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for PlayerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_neutral() {
            f.write_str("neutral")
        } else {
            write!(f, "player {}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_is_zero() {
        assert!(PlayerId::NEUTRAL.is_neutral());
        assert_eq!(PlayerId::default(), PlayerId::NEUTRAL);
        assert!(!PlayerId::new(1).is_neutral());
    }

    #[test]
    fn test_display() {
        assert_eq!(PlayerId::NEUTRAL.to_string(), "neutral");
        assert_eq!(PlayerId::new(2).to_string(), "player 2");
    }
}
