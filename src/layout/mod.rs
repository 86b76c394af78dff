//! Reserved regions of the surface.
//!
//! ## Key Types
//!
//! - `Rect`: Axis-aligned bounding box
//! - `Control`: What a tap on a reserved region activates
//! - `Layout`: Control geometry and hit-testing

pub mod geometry;
pub mod controls;

pub use geometry::Rect;
pub use controls::{Control, Layout};
