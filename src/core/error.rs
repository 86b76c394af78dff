//! Error types for surface operations and configuration loading.
//!
//! `SurfaceError` covers the guarded conditions of the surface handlers.
//! Two of them are user-facing notices (the tap limit and a selection with
//! too few markers); their `Display` text is the exact message shown.

use thiserror::Error;

/// Failure of a surface operation. None of these change state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The registry already holds `limit` markers.
    #[error("click limit reached")]
    LimitReached { limit: usize },

    /// A selection was requested with fewer markers than players.
    #[error("insufficient clicks for the number of players")]
    InsufficientMarkers { placed: usize, required: usize },

    /// The requested player count is outside `1..=max`.
    #[error("player count {requested} is outside 1..={max}")]
    InvalidPlayerCount { requested: u8, max: u8 },
}

impl SurfaceError {
    /// Whether this error is shown to the user as a blocking notice.
    #[must_use]
    pub fn is_notice(&self) -> bool {
        matches!(
            self,
            SurfaceError::LimitReached { .. } | SurfaceError::InsufficientMarkers { .. }
        )
    }
}

/// Failure while loading or validating a `SurfaceConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
