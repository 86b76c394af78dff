//! Markers placed on the surface.
//!
//! ## Coordinates
//!
//! `Point` is surface-relative: origin at the top-left corner, `x` grows to
//! the right and `y` grows downward, in the same units as the surface size
//! (logical pixels for a touch screen).
//!
//! ## Sequence numbers
//!
//! Every marker gets a `SequenceNumber` when it is placed. Numbers are
//! 1-based and follow insertion order, so in a registry holding `n` markers
//! the numbers are exactly `1..=n`.

use serde::{Deserialize, Serialize};

/// Maximum number of markers a surface can hold.
pub const MARKER_LIMIT: usize = 6;

/// A surface-relative position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// 1-based position of a marker in placement order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SequenceNumber(u8);

impl SequenceNumber {
    /// Create a sequence number.
    #[must_use]
    pub const fn new(n: u8) -> Self {
        Self(n)
    }

    /// Sequence number for the marker stored at a 0-based index.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(index as u8 + 1)
    }

    /// The 0-based index this number occupies in the registry.
    ///
    /// `None` for 0, which no placed marker carries.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }

    /// Get the raw value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A placed, numbered point representing one candidate participant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Where the tap landed.
    pub position: Point,
    /// Placement order, immutable once assigned.
    pub sequence: SequenceNumber,
}

impl Marker {
    /// Create a marker.
    #[must_use]
    pub const fn new(position: Point, sequence: SequenceNumber) -> Self {
        Self { position, sequence }
    }
}
