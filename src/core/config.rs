//! Surface configuration.
//!
//! A surface is configured at startup by a `SurfaceConfig`:
//! - Size of the touch surface and the geometry of its controls
//! - Upper bound of the player-count choices (6, or 5 for the compact panel)
//! - Marker theme (sequence numbers or a fixed icon)
//! - Shuffle strategy and optional RNG seed
//!
//! Configs can be built in code with the `with_*` methods or loaded from
//! TOML; every field has a default, so a partial file is fine.
//!
//! ```
//! use tap_select::core::{SurfaceConfig, Theme};
//!
//! let config = SurfaceConfig::from_toml_str("max_players = 5\ntheme = \"icon\"").unwrap();
//! assert_eq!(config.max_players, 5);
//! assert_eq!(config.theme, Theme::Icon);
//! assert_eq!(config.width, 390.0);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::marker::MARKER_LIMIT;
use super::player::PlayerCount;

/// How markers are labelled when drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Each marker shows its sequence number.
    #[default]
    Numbered,
    /// Every marker shows the same icon.
    Icon,
}

/// Which shuffle the selector runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShuffleKind {
    /// Uniform Fisher-Yates shuffle.
    #[default]
    FisherYates,
    /// Insertion sort driven by a coin-flip comparator. Biased; kept for
    /// parity with the "random sort" behaviour.
    CoinFlip,
}

/// Geometry of the bottom control bar and configuration sheet.
///
/// All values are in surface units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Diameter of the round reset / play / menu buttons.
    pub button_size: f32,
    /// Gap between the bottom edge and the button row.
    pub bottom_offset: f32,
    /// Horizontal padding of the button row.
    pub padding: f32,
    /// Height of the configuration sheet when open.
    pub sheet_height: f32,
    /// Side of each player-count choice button in the sheet.
    pub choice_size: f32,
    /// Gap between choice buttons.
    pub choice_gap: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            button_size: 40.0,
            bottom_offset: 24.0,
            padding: 16.0,
            sheet_height: 160.0,
            choice_size: 40.0,
            choice_gap: 8.0,
        }
    }
}

/// Complete surface configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Surface width.
    pub width: f32,

    /// Surface height.
    pub height: f32,

    /// Largest selectable player count (5 or 6).
    pub max_players: u8,

    /// Player count when the session starts.
    pub initial_players: u8,

    /// Marker labelling.
    pub theme: Theme,

    /// Shuffle used by the selector.
    pub shuffle: ShuffleKind,

    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Control geometry.
    pub layout: LayoutConfig,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 390.0,
            height: 844.0,
            max_players: MARKER_LIMIT as u8,
            initial_players: 1,
            theme: Theme::Numbered,
            shuffle: ShuffleKind::FisherYates,
            seed: None,
            layout: LayoutConfig::default(),
        }
    }
}

impl SurfaceConfig {
    /// Create a default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML and validate it.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Set the surface size.
    #[must_use]
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the largest selectable player count.
    #[must_use]
    pub fn with_max_players(mut self, max: u8) -> Self {
        self.max_players = max;
        self
    }

    /// Set the starting player count.
    #[must_use]
    pub fn with_initial_players(mut self, players: u8) -> Self {
        self.initial_players = players;
        self
    }

    /// Set the marker theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the shuffle strategy.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: ShuffleKind) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The starting player count as a validated value.
    pub fn initial_player_count(&self) -> Result<PlayerCount, ConfigError> {
        PlayerCount::new(self.initial_players, self.max_players)
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Check that the configuration describes a usable surface.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "surface size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(5..=MARKER_LIMIT as u8).contains(&self.max_players) {
            return Err(ConfigError::Invalid(format!(
                "max_players must be 5 or {}, got {}",
                MARKER_LIMIT, self.max_players
            )));
        }
        self.initial_player_count()?;

        let layout = &self.layout;
        let bar_width = layout.padding * 2.0 + layout.button_size * 3.0;
        if bar_width > self.width
            || layout.bottom_offset + layout.button_size > self.height
            || layout.sheet_height > self.height
        {
            return Err(ConfigError::Invalid(
                "controls do not fit on the surface".to_string(),
            ));
        }

        let choices = f32::from(self.max_players);
        let row_width = choices * layout.choice_size + (choices - 1.0) * layout.choice_gap;
        if row_width > self.width || layout.choice_size > layout.sheet_height {
            return Err(ConfigError::Invalid(format!(
                "{} player choices do not fit in a {}x{} sheet",
                self.max_players, self.width, layout.sheet_height
            )));
        }
        Ok(())
    }
}
