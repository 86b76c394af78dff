//! The selection surface: markers, player count, selection, and the handlers
//! that mutate them.
//!
//! ## Phases
//!
//! ```text
//! Empty ──tap──▶ Placing ──6th tap──▶ Full
//!   │               │                   │
//!   └───────────────┴──── play ─────────┴──▶ Selected
//!
//! reset / player-count change: any phase ──▶ Empty
//! ```
//!
//! Every handler runs to completion and either changes state and bumps the
//! revision, or fails and leaves everything as it was. Front ends redraw
//! when `revision()` moves.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::config::SurfaceConfig;
use crate::core::error::{ConfigError, SurfaceError};
use crate::core::marker::{Marker, Point, SequenceNumber};
use crate::core::player::PlayerCount;
use crate::core::rng::SurfaceRng;
use crate::layout::{Control, Layout};
use crate::registry::ClickRegistry;
use crate::selection::{SelectionResult, Selector};

/// Where the surface is in its interaction loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfacePhase {
    /// No markers placed.
    Empty,
    /// Some markers placed, below the limit, nothing selected.
    Placing,
    /// Marker limit reached, nothing selected.
    Full,
    /// A selection is highlighted.
    Selected,
}

impl std::fmt::Display for SurfacePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SurfacePhase::Empty => "empty",
            SurfacePhase::Placing => "placing",
            SurfacePhase::Full => "full",
            SurfacePhase::Selected => "selected",
        };
        f.write_str(name)
    }
}

/// What a tap did.
#[derive(Clone, Debug, PartialEq)]
pub enum TapOutcome {
    /// The tap placed a new marker.
    Placed(Marker),
    /// The tap landed on a reserved control, whose handler ran.
    Activated(Control),
    /// The tap fell outside the surface or on an inert part of the sheet.
    Ignored,
    /// The tap, or the control it hit, was refused. Nothing changed.
    Rejected(SurfaceError),
}

impl TapOutcome {
    /// The user-facing notice this tap produced, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&SurfaceError> {
        match self {
            TapOutcome::Rejected(err) if err.is_notice() => Some(err),
            _ => None,
        }
    }
}

/// Tap-to-place surface that picks a random subset of markers.
///
/// ## Example
///
/// ```
/// use tap_select::core::{Point, SurfaceConfig};
/// use tap_select::surface::{SelectionSurface, SurfacePhase};
///
/// let mut surface = SelectionSurface::new(SurfaceConfig::new().with_seed(1)).unwrap();
/// surface.set_player_count(2).unwrap();
///
/// for x in [50.0, 150.0, 250.0] {
///     surface.place(Point::new(x, 100.0)).unwrap();
/// }
///
/// let picked = surface.play().unwrap();
/// assert_eq!(picked.len(), 2);
/// assert_eq!(surface.phase(), SurfacePhase::Selected);
/// ```
#[derive(Clone, Debug)]
pub struct SelectionSurface {
    config: SurfaceConfig,
    layout: Layout,
    registry: ClickRegistry,
    selection: SelectionResult,
    players: PlayerCount,
    selector: Selector,
    rng: SurfaceRng,
    sheet_open: bool,
    revision: u64,
}

impl SelectionSurface {
    /// Create a surface from a validated configuration.
    pub fn new(config: SurfaceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let players = config.initial_player_count()?;
        let rng = match config.seed {
            Some(seed) => SurfaceRng::new(seed),
            None => SurfaceRng::from_entropy(),
        };

        info!(
            width = config.width,
            height = config.height,
            max_players = config.max_players,
            shuffle = ?config.shuffle,
            seed = rng.seed(),
            "surface ready"
        );

        Ok(Self {
            layout: Layout::new(&config),
            selector: Selector::new(config.shuffle),
            registry: ClickRegistry::new(),
            selection: SelectionResult::empty(),
            players,
            rng,
            sheet_open: false,
            revision: 0,
            config,
        })
    }

    // === Handlers ===

    /// Handle a tap at `point`.
    ///
    /// Taps on reserved controls run the control's handler; any other tap
    /// inside the surface places a marker. Points off the surface, or with
    /// non-finite coordinates, are ignored.
    pub fn tap(&mut self, point: Point) -> TapOutcome {
        if !point.is_finite() || !self.layout.bounds().contains(point) {
            debug!(x = point.x, y = point.y, "tap off surface");
            return TapOutcome::Ignored;
        }

        match self.layout.hit_test(point, self.sheet_open) {
            Some(Control::Sheet) => TapOutcome::Ignored,
            Some(control) => match self.activate(control) {
                Ok(()) => TapOutcome::Activated(control),
                Err(err) => TapOutcome::Rejected(err),
            },
            None => match self.place(point) {
                Ok(marker) => TapOutcome::Placed(marker),
                Err(err) => TapOutcome::Rejected(err),
            },
        }
    }

    /// Run the handler of `control`.
    pub fn activate(&mut self, control: Control) -> Result<(), SurfaceError> {
        match control {
            Control::Reset => self.reset(),
            Control::Play => {
                self.play()?;
            }
            Control::ConfigTrigger => self.open_sheet(),
            Control::Overlay => self.close_sheet(),
            Control::Sheet => {}
            Control::PlayerChoice(n) => self.set_player_count(n.get())?,
        }
        Ok(())
    }

    /// Place a marker at `point` without hit-testing.
    ///
    /// Fails with `SurfaceError::LimitReached` when the surface is full.
    /// An existing selection is kept.
    pub fn place(&mut self, point: Point) -> Result<Marker, SurfaceError> {
        match self.registry.register(point) {
            Ok(marker) => {
                debug!(sequence = %marker.sequence, x = point.x, y = point.y, "marker placed");
                self.touch();
                Ok(marker)
            }
            Err(err) => {
                debug!(%err, "tap refused");
                Err(err)
            }
        }
    }

    /// Draw a selection of `player_count()` markers.
    ///
    /// Fails with `SurfaceError::InsufficientMarkers` when too few markers
    /// are placed; markers and any previous selection are left as they were.
    pub fn play(&mut self) -> Result<&SelectionResult, SurfaceError> {
        let result = self
            .selector
            .select(self.registry.markers(), self.players, &mut self.rng);

        match result {
            Ok(selection) => {
                info!(players = %self.players, picked = ?selection.sorted(), "selection drawn");
                self.selection = selection;
                self.touch();
                Ok(&self.selection)
            }
            Err(err) => {
                debug!(%err, placed = self.registry.len(), players = %self.players, "selection refused");
                Err(err)
            }
        }
    }

    /// Clear markers and selection.
    pub fn reset(&mut self) {
        info!(cleared = self.registry.len(), "surface reset");
        self.registry.reset();
        self.selection.clear();
        self.touch();
    }

    /// Change the player count.
    ///
    /// A different value clears markers and selection. Choosing the current
    /// value changes nothing.
    pub fn set_player_count(&mut self, players: u8) -> Result<(), SurfaceError> {
        let players = PlayerCount::new(players, self.config.max_players)?;
        if players == self.players {
            return Ok(());
        }

        info!(from = %self.players, to = %players, "player count changed");
        self.players = players;
        self.reset();
        Ok(())
    }

    /// Open the configuration sheet.
    pub fn open_sheet(&mut self) {
        if !self.sheet_open {
            self.sheet_open = true;
            self.touch();
        }
    }

    /// Close the configuration sheet.
    pub fn close_sheet(&mut self) {
        if self.sheet_open {
            self.sheet_open = false;
            self.touch();
        }
    }

    /// Open the sheet if closed, close it if open.
    pub fn toggle_sheet(&mut self) {
        if self.sheet_open {
            self.close_sheet();
        } else {
            self.open_sheet();
        }
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    // === Accessors ===

    /// Placed markers in placement order.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        self.registry.markers()
    }

    /// Current selection. Empty until `play` succeeds.
    #[must_use]
    pub fn selection(&self) -> &SelectionResult {
        &self.selection
    }

    /// Whether the marker numbered `sequence` is currently selected.
    #[must_use]
    pub fn is_selected(&self, sequence: SequenceNumber) -> bool {
        self.selection.contains(sequence)
    }

    /// Active player count.
    #[must_use]
    pub fn player_count(&self) -> PlayerCount {
        self.players
    }

    /// Current phase, derived from markers and selection.
    #[must_use]
    pub fn phase(&self) -> SurfacePhase {
        if !self.selection.is_empty() {
            SurfacePhase::Selected
        } else if self.registry.is_empty() {
            SurfacePhase::Empty
        } else if self.registry.is_full() {
            SurfacePhase::Full
        } else {
            SurfacePhase::Placing
        }
    }

    /// Whether the configuration sheet is open.
    #[must_use]
    pub fn is_sheet_open(&self) -> bool {
        self.sheet_open
    }

    /// Counter bumped on every state change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Configuration the surface was built with.
    #[must_use]
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Control geometry.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }
}
