//! The selection surface and its render model.
//!
//! - `state`: `SelectionSurface` state machine and event handlers
//! - `view`: `SurfaceView`, a pure description of what to draw

pub mod state;
pub mod view;

pub use state::{SelectionSurface, SurfacePhase, TapOutcome};
pub use view::{MarkerStyle, RenderedMarker, SurfaceView, MARKER_ICON};
