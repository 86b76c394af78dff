//! Python bindings for the selection surface.
//!
//! # Quick Start
//!
//! ```python
//! import tap_select as ts
//!
//! surface = ts.SelectionSurface(players=2, seed=42)
//!
//! for x in (60.0, 160.0, 260.0):
//!     surface.tap(x, 120.0)
//!
//! picked = surface.play()   # e.g. [3, 1]
//! print(surface.render())
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_surface;

pub use py_core::*;
pub use py_surface::*;

/// tap_select: tap-to-place markers, random pick of players.
#[pymodule]
fn tap_select(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMarker>()?;
    m.add_class::<PySelectionSurface>()?;

    Ok(())
}
