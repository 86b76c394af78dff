//! Drawing a random subset of markers.
//!
//! The selector shuffles the placed markers' sequence numbers and keeps the
//! first `player_count` of them. It only reads the markers; placement order
//! and positions are never touched.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::config::ShuffleKind;
use crate::core::error::SurfaceError;
use crate::core::marker::{Marker, SequenceNumber, MARKER_LIMIT};
use crate::core::player::PlayerCount;
use crate::core::rng::SurfaceRng;

use super::shuffle::ShuffleStrategy;

/// Sequence numbers picked by a selection, in draw order.
///
/// Empty before the first selection and after a reset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionResult {
    drawn: SmallVec<[SequenceNumber; MARKER_LIMIT]>,
}

impl SelectionResult {
    /// An empty result.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether `sequence` was picked.
    #[must_use]
    pub fn contains(&self, sequence: SequenceNumber) -> bool {
        self.drawn.contains(&sequence)
    }

    /// Number of picked markers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.drawn.len()
    }

    /// Whether nothing is picked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.drawn.is_empty()
    }

    /// Picked sequence numbers in draw order.
    #[must_use]
    pub fn as_slice(&self) -> &[SequenceNumber] {
        &self.drawn
    }

    /// Iterate over picked sequence numbers in draw order.
    pub fn iter(&self) -> impl Iterator<Item = SequenceNumber> + '_ {
        self.drawn.iter().copied()
    }

    /// Picked sequence numbers in ascending order.
    #[must_use]
    pub fn sorted(&self) -> Vec<SequenceNumber> {
        let mut sorted = self.drawn.to_vec();
        sorted.sort_unstable();
        sorted
    }

    pub(crate) fn clear(&mut self) {
        self.drawn.clear();
    }
}

impl FromIterator<SequenceNumber> for SelectionResult {
    fn from_iter<I: IntoIterator<Item = SequenceNumber>>(iter: I) -> Self {
        Self {
            drawn: iter.into_iter().collect(),
        }
    }
}

/// Picks `player_count` markers at random.
///
/// ## Example
///
/// ```
/// use tap_select::core::{Marker, PlayerCount, Point, SequenceNumber, SurfaceRng};
/// use tap_select::selection::{FisherYates, Selector};
///
/// let markers: Vec<Marker> = (1..=3)
///     .map(|n| Marker::new(Point::new(n as f32, 0.0), SequenceNumber::new(n)))
///     .collect();
///
/// let selector = Selector::new(FisherYates);
/// let mut rng = SurfaceRng::new(42);
/// let two = PlayerCount::new(2, 6).unwrap();
///
/// let result = selector.select(&markers, two, &mut rng).unwrap();
/// assert_eq!(result.len(), 2);
/// assert!(result.iter().all(|s| (1..=3).contains(&s.get())));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Selector<S = ShuffleKind> {
    strategy: S,
}

impl<S: ShuffleStrategy> Selector<S> {
    /// Create a selector using `strategy`.
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    /// The shuffle this selector runs.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Draw `players` markers from `markers`.
    ///
    /// Fails with `SurfaceError::InsufficientMarkers` when fewer markers than
    /// players are placed.
    pub fn select(
        &self,
        markers: &[Marker],
        players: PlayerCount,
        rng: &mut SurfaceRng,
    ) -> Result<SelectionResult, SurfaceError> {
        let required = players.as_usize();
        if markers.len() < required {
            return Err(SurfaceError::InsufficientMarkers {
                placed: markers.len(),
                required,
            });
        }

        let mut pool: SmallVec<[SequenceNumber; MARKER_LIMIT]> =
            markers.iter().map(|m| m.sequence).collect();
        self.strategy.shuffle(&mut pool, rng);
        pool.truncate(required);

        debug!(placed = markers.len(), required, drawn = ?pool, "drew selection");
        Ok(SelectionResult { drawn: pool })
    }
}
