//! # tap-select
//!
//! A tap-to-place surface that picks who plays.
//!
//! Players tap the surface to drop numbered markers (up to six), then press
//! play: a random subset of markers, as many as the configured player count,
//! is highlighted.
//!
//! ## Design Principles
//!
//! 1. **One owner of state**: `SelectionSurface` holds markers, player count
//!    and selection, and only its `&mut self` handlers change them.
//!
//! 2. **Failures change nothing**: the tap limit and a selection with too
//!    few markers are reported as `SurfaceError` notices and leave state
//!    exactly as it was.
//!
//! 3. **Pure rendering**: `SurfaceView` is computed from state; front ends
//!    redraw whenever `SelectionSurface::revision` moves.
//!
//! ## Modules
//!
//! - `core`: Markers, player count, RNG, configuration, errors
//! - `registry`: Capped, ordered marker list
//! - `selection`: Shuffle strategies and the selector
//! - `layout`: Reserved control regions and hit-testing
//! - `surface`: The surface state machine and its render model

pub mod core;
pub mod registry;
pub mod selection;
pub mod layout;
pub mod surface;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Marker, Point, SequenceNumber, MARKER_LIMIT,
    PlayerCount,
    SurfaceRng,
    LayoutConfig, ShuffleKind, SurfaceConfig, Theme,
    ConfigError, SurfaceError,
};

pub use crate::registry::ClickRegistry;

pub use crate::selection::{CoinFlipInsertion, FisherYates, SelectionResult, Selector, ShuffleStrategy};

pub use crate::layout::{Control, Layout, Rect};

pub use crate::surface::{
    MarkerStyle, RenderedMarker, SelectionSurface, SurfacePhase, SurfaceView, TapOutcome,
};
