//! Marker placement.
//!
//! ## Key Types
//!
//! - `ClickRegistry`: Ordered, capped list of placed markers

pub mod clicks;

pub use clicks::ClickRegistry;
