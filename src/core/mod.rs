//! Core surface types: markers, player count, RNG, configuration, errors.
//!
//! Everything else in the crate is built from these value types.

pub mod marker;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use marker::{Marker, Point, SequenceNumber, MARKER_LIMIT};
pub use player::PlayerCount;
pub use rng::SurfaceRng;
pub use config::{LayoutConfig, ShuffleKind, SurfaceConfig, Theme};
pub use error::{ConfigError, SurfaceError};
