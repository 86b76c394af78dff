//! Player count for a session.
//!
//! ## PlayerCount
//!
//! How many markers a selection picks. Always at least 1; the upper bound
//! comes from `SurfaceConfig::max_players` (6 by default, 5 in the compact
//! variant of the configuration panel).

use serde::{Deserialize, Serialize};

use super::error::SurfaceError;
use super::marker::MARKER_LIMIT;

/// Number of players a selection picks.
///
/// Construct with `PlayerCount::new(n, max)` to validate against the
/// configured bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerCount(u8);

impl PlayerCount {
    /// Smallest allowed player count.
    pub const MIN: PlayerCount = PlayerCount(1);

    /// Largest player count any configuration allows.
    pub const MAX: PlayerCount = PlayerCount(MARKER_LIMIT as u8);

    /// Create a player count in `1..=max`.
    ///
    /// ```
    /// use tap_select::core::PlayerCount;
    ///
    /// assert_eq!(PlayerCount::new(3, 6).unwrap().get(), 3);
    /// assert!(PlayerCount::new(6, 5).is_err());
    /// assert!(PlayerCount::new(0, 6).is_err());
    /// ```
    pub fn new(n: u8, max: u8) -> Result<Self, SurfaceError> {
        let max = max.min(Self::MAX.0);
        if (1..=max).contains(&n) {
            Ok(Self(n))
        } else {
            Err(SurfaceError::InvalidPlayerCount { requested: n, max })
        }
    }

    /// Get the raw value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The count as a length.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every choice offered when the bound is `max`.
    pub fn choices(max: u8) -> impl Iterator<Item = PlayerCount> {
        (1..=max.min(Self::MAX.0)).map(PlayerCount)
    }
}

impl Default for PlayerCount {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<u8> for PlayerCount {
    type Error = SurfaceError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n, Self::MAX.0)
    }
}

impl From<PlayerCount> for u8 {
    fn from(count: PlayerCount) -> Self {
        count.0
    }
}

impl std::fmt::Display for PlayerCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
