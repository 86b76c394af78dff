//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::Marker;

/// Python wrapper for Marker.
#[pyclass(name = "Marker")]
#[derive(Clone, Debug)]
pub struct PyMarker(pub Marker);

#[pymethods]
impl PyMarker {
    /// Sequence number (1-based placement order).
    #[getter]
    fn number(&self) -> u8 {
        self.0.sequence.get()
    }

    #[getter]
    fn x(&self) -> f32 {
        self.0.position.x
    }

    #[getter]
    fn y(&self) -> f32 {
        self.0.position.y
    }

    fn __repr__(&self) -> String {
        format!(
            "Marker(number={}, x={}, y={})",
            self.0.sequence, self.0.position.x, self.0.position.y
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
