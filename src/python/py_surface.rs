//! Surface bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Point, ShuffleKind, SurfaceConfig, Theme};
use crate::surface::{SelectionSurface, SurfaceView, TapOutcome};

use super::py_core::PyMarker;

/// Python wrapper for SelectionSurface.
///
/// Notices ("click limit reached", "insufficient clicks for the number of
/// players") and invalid player counts are raised as `ValueError`.
#[pyclass(name = "SelectionSurface")]
pub struct PySelectionSurface {
    inner: SelectionSurface,
}

#[pymethods]
impl PySelectionSurface {
    /// Create a new surface.
    ///
    /// # Arguments
    /// - players: Starting player count
    /// - max_players: Largest selectable player count (5 or 6)
    /// - width, height: Surface size
    /// - seed: RNG seed, or None for a random one
    /// - legacy_shuffle: Use the coin-flip insertion shuffle
    /// - icons: Label markers with an icon instead of numbers
    #[new]
    #[pyo3(signature = (
        players = 1,
        max_players = 6,
        width = 390.0,
        height = 844.0,
        seed = None,
        legacy_shuffle = false,
        icons = false
    ))]
    fn new(
        players: u8,
        max_players: u8,
        width: f32,
        height: f32,
        seed: Option<u64>,
        legacy_shuffle: bool,
        icons: bool,
    ) -> PyResult<Self> {
        let mut config = SurfaceConfig::new()
            .with_size(width, height)
            .with_max_players(max_players)
            .with_initial_players(players)
            .with_shuffle(if legacy_shuffle {
                ShuffleKind::CoinFlip
            } else {
                ShuffleKind::FisherYates
            })
            .with_theme(if icons { Theme::Icon } else { Theme::Numbered });
        config.seed = seed;

        let inner =
            SelectionSurface::new(config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Tap at (x, y). Returns the placed marker, or None when the tap hit a
    /// control or was ignored.
    fn tap(&mut self, x: f32, y: f32) -> PyResult<Option<PyMarker>> {
        match self.inner.tap(Point::new(x, y)) {
            TapOutcome::Placed(marker) => Ok(Some(PyMarker(marker))),
            TapOutcome::Activated(_) | TapOutcome::Ignored => Ok(None),
            TapOutcome::Rejected(err) => Err(PyValueError::new_err(err.to_string())),
        }
    }

    /// Draw a selection. Returns the picked marker numbers in draw order.
    fn play(&mut self) -> PyResult<Vec<u8>> {
        self.inner
            .play()
            .map(|picked| picked.iter().map(|s| s.get()).collect())
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Clear markers and selection.
    fn reset(&mut self) {
        self.inner.reset();
    }

    /// Change the player count (clears the surface when it changes).
    fn set_player_count(&mut self, players: u8) -> PyResult<()> {
        self.inner
            .set_player_count(players)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Open or close the configuration sheet.
    fn toggle_panel(&mut self) {
        self.inner.toggle_sheet();
    }

    /// Placed markers in placement order.
    #[getter]
    fn markers(&self) -> Vec<PyMarker> {
        self.inner.markers().iter().copied().map(PyMarker).collect()
    }

    /// Currently selected marker numbers in draw order.
    #[getter]
    fn selection(&self) -> Vec<u8> {
        self.inner.selection().iter().map(|s| s.get()).collect()
    }

    /// Active player count.
    #[getter]
    fn player_count(&self) -> u8 {
        self.inner.player_count().get()
    }

    /// Current phase: "empty", "placing", "full" or "selected".
    #[getter]
    fn phase(&self) -> String {
        self.inner.phase().to_string()
    }

    /// Text rendering of the surface.
    #[pyo3(signature = (cols = 40, rows = 12))]
    fn render(&self, cols: usize, rows: usize) -> String {
        SurfaceView::of(&self.inner).paint(cols, rows)
    }

    fn __repr__(&self) -> String {
        format!(
            "SelectionSurface(players={}, markers={}, phase={})",
            self.inner.player_count(),
            self.inner.markers().len(),
            self.inner.phase()
        )
    }
}
