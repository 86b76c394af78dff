//! Click registry: the ordered list of placed markers.
//!
//! The `ClickRegistry` appends a marker for every accepted tap and numbers it
//! by insertion order. It holds at most `MARKER_LIMIT` markers; a tap beyond
//! the limit is rejected without touching the list.

use smallvec::SmallVec;

use crate::core::error::SurfaceError;
use crate::core::marker::{Marker, Point, SequenceNumber, MARKER_LIMIT};

/// Ordered sequence of placed markers.
///
/// ## Example
///
/// ```
/// use tap_select::core::{Point, SequenceNumber};
/// use tap_select::registry::ClickRegistry;
///
/// let mut registry = ClickRegistry::new();
///
/// let first = registry.register(Point::new(10.0, 20.0)).unwrap();
/// let second = registry.register(Point::new(30.0, 40.0)).unwrap();
///
/// assert_eq!(first.sequence, SequenceNumber::new(1));
/// assert_eq!(second.sequence, SequenceNumber::new(2));
/// assert_eq!(registry.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ClickRegistry {
    markers: SmallVec<[Marker; MARKER_LIMIT]>,
}

impl ClickRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a marker at `position`.
    ///
    /// The new marker is numbered `len() + 1`. Fails with
    /// `SurfaceError::LimitReached` when the registry is full.
    pub fn register(&mut self, position: Point) -> Result<Marker, SurfaceError> {
        if self.is_full() {
            return Err(SurfaceError::LimitReached { limit: MARKER_LIMIT });
        }

        let marker = Marker::new(position, SequenceNumber::from_index(self.markers.len()));
        self.markers.push(marker);
        Ok(marker)
    }

    /// Remove every marker. Numbering starts again at 1.
    pub fn reset(&mut self) {
        self.markers.clear();
    }

    /// All markers in placement order.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Number of placed markers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Whether no markers are placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Whether the registry is at the marker limit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.markers.len() >= MARKER_LIMIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(registry: &mut ClickRegistry, count: usize) {
        for i in 0..count {
            registry.register(Point::new(i as f32 * 10.0, 5.0)).unwrap();
        }
    }

    #[test]
    fn test_numbering_follows_insertion() {
        let mut registry = ClickRegistry::new();
        fill(&mut registry, 4);

        for (i, marker) in registry.markers().iter().enumerate() {
            assert_eq!(marker.sequence.get() as usize, i + 1);
            assert_eq!(marker.position.x, i as f32 * 10.0);
        }
    }

    #[test]
    fn test_limit() {
        let mut registry = ClickRegistry::new();
        fill(&mut registry, MARKER_LIMIT);
        assert!(registry.is_full());

        let result = registry.register(Point::new(1.0, 1.0));
        assert_eq!(result, Err(SurfaceError::LimitReached { limit: 6 }));
        assert_eq!(registry.len(), MARKER_LIMIT);
    }

    #[test]
    fn test_reset_restarts_numbering() {
        let mut registry = ClickRegistry::new();
        fill(&mut registry, 3);

        registry.reset();
        assert!(registry.is_empty());

        let marker = registry.register(Point::new(0.0, 0.0)).unwrap();
        assert_eq!(marker.sequence, SequenceNumber::new(1));
    }
}
