//! Reserved control regions and hit-testing.
//!
//! The surface reserves a few areas for its own controls. A tap landing in
//! one of them activates that control instead of placing a marker:
//!
//! - Bottom bar: reset (left), play (centre), configuration trigger (right)
//! - Configuration sheet (when open): a row of player-count choices
//! - Overlay (when the sheet is open): everything outside the sheet
//!
//! While the sheet is open the overlay covers the whole surface, so every tap
//! hits some control and no marker can be placed.

use serde::{Deserialize, Serialize};

use crate::core::config::SurfaceConfig;
use crate::core::marker::Point;
use crate::core::player::PlayerCount;

use super::geometry::Rect;

/// A reserved control a tap can land on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    /// Clears markers and selection.
    Reset,
    /// Runs a selection.
    Play,
    /// Opens the configuration sheet.
    ConfigTrigger,
    /// Dimmed area around the open sheet; closes it.
    Overlay,
    /// Inside the open sheet but not on a choice.
    Sheet,
    /// A player-count choice in the open sheet.
    PlayerChoice(PlayerCount),
}

impl std::fmt::Display for Control {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Control::Reset => write!(f, "reset"),
            Control::Play => write!(f, "play"),
            Control::ConfigTrigger => write!(f, "menu"),
            Control::Overlay => write!(f, "overlay"),
            Control::Sheet => write!(f, "sheet"),
            Control::PlayerChoice(n) => write!(f, "players {}", n),
        }
    }
}

/// Control geometry for one surface size.
///
/// ## Example
///
/// ```
/// use tap_select::core::{Point, SurfaceConfig};
/// use tap_select::layout::{Control, Layout};
///
/// let layout = Layout::new(&SurfaceConfig::default());
///
/// let reset = layout.reset().center();
/// assert_eq!(layout.hit_test(reset, false), Some(Control::Reset));
///
/// // Open area of the surface: not reserved.
/// assert_eq!(layout.hit_test(Point::new(200.0, 300.0), false), None);
///
/// // With the sheet open the same point lands on the overlay.
/// assert_eq!(layout.hit_test(Point::new(200.0, 300.0), true), Some(Control::Overlay));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    bounds: Rect,
    reset: Rect,
    play: Rect,
    trigger: Rect,
    sheet: Rect,
    choices: Vec<(PlayerCount, Rect)>,
}

impl Layout {
    /// Compute control positions for `config`.
    #[must_use]
    pub fn new(config: &SurfaceConfig) -> Self {
        let geo = &config.layout;
        let (width, height) = (config.width, config.height);

        let button = geo.button_size;
        let row_y = height - geo.bottom_offset - button;
        let reset = Rect::new(geo.padding, row_y, button, button);
        let play = Rect::new((width - button) / 2.0, row_y, button, button);
        let trigger = Rect::new(width - geo.padding - button, row_y, button, button);

        let sheet = Rect::new(0.0, height - geo.sheet_height, width, geo.sheet_height);

        let count = PlayerCount::choices(config.max_players).count() as f32;
        let row_width = count * geo.choice_size + (count - 1.0).max(0.0) * geo.choice_gap;
        let first_x = (width - row_width) / 2.0;
        let choice_y = sheet.y + (sheet.height - geo.choice_size) / 2.0;
        let choices = PlayerCount::choices(config.max_players)
            .enumerate()
            .map(|(i, n)| {
                let x = first_x + i as f32 * (geo.choice_size + geo.choice_gap);
                (n, Rect::new(x, choice_y, geo.choice_size, geo.choice_size))
            })
            .collect();

        Self {
            bounds: Rect::new(0.0, 0.0, width, height),
            reset,
            play,
            trigger,
            sheet,
            choices,
        }
    }

    /// The whole surface.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Reset button.
    #[must_use]
    pub fn reset(&self) -> Rect {
        self.reset
    }

    /// Play button.
    #[must_use]
    pub fn play(&self) -> Rect {
        self.play
    }

    /// Configuration trigger button.
    #[must_use]
    pub fn trigger(&self) -> Rect {
        self.trigger
    }

    /// Configuration sheet area.
    #[must_use]
    pub fn sheet(&self) -> Rect {
        self.sheet
    }

    /// Player-count choices, left to right.
    #[must_use]
    pub fn choices(&self) -> &[(PlayerCount, Rect)] {
        &self.choices
    }

    /// Area of the choice for `players`, if offered.
    #[must_use]
    pub fn choice(&self, players: PlayerCount) -> Option<Rect> {
        self.choices.iter().find(|(n, _)| *n == players).map(|(_, r)| *r)
    }

    /// Find the reserved control under `point`.
    ///
    /// Returns `None` when the tap should place a marker.
    #[must_use]
    pub fn hit_test(&self, point: Point, sheet_open: bool) -> Option<Control> {
        if sheet_open {
            if let Some((n, _)) = self.choices.iter().find(|(_, r)| r.contains(point)) {
                return Some(Control::PlayerChoice(*n));
            }
            if self.sheet.contains(point) {
                return Some(Control::Sheet);
            }
            return Some(Control::Overlay);
        }

        [
            (self.reset, Control::Reset),
            (self.play, Control::Play),
            (self.trigger, Control::ConfigTrigger),
        ]
        .into_iter()
        .find(|(rect, _)| rect.contains(point))
        .map(|(_, control)| control)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout::new(&SurfaceConfig::default())
    }

    #[test]
    fn test_button_positions() {
        let layout = layout();

        assert_eq!(layout.reset(), Rect::new(16.0, 780.0, 40.0, 40.0));
        assert_eq!(layout.play(), Rect::new(175.0, 780.0, 40.0, 40.0));
        assert_eq!(layout.trigger(), Rect::new(334.0, 780.0, 40.0, 40.0));
    }

    #[test]
    fn test_bar_hits() {
        let layout = layout();

        assert_eq!(layout.hit_test(layout.reset().center(), false), Some(Control::Reset));
        assert_eq!(layout.hit_test(layout.play().center(), false), Some(Control::Play));
        assert_eq!(
            layout.hit_test(layout.trigger().center(), false),
            Some(Control::ConfigTrigger)
        );
    }

    #[test]
    fn test_open_area_is_free() {
        let layout = layout();

        assert_eq!(layout.hit_test(Point::new(0.0, 0.0), false), None);
        // Between the reset and play buttons.
        assert_eq!(layout.hit_test(Point::new(100.0, 800.0), false), None);
        // Below the button row.
        assert_eq!(layout.hit_test(Point::new(30.0, 830.0), false), None);
    }

    #[test]
    fn test_sheet_hits() {
        let layout = layout();

        for (n, rect) in layout.choices() {
            assert_eq!(layout.hit_test(rect.center(), true), Some(Control::PlayerChoice(*n)));
        }
        assert_eq!(layout.hit_test(Point::new(2.0, 700.0), true), Some(Control::Sheet));
        assert_eq!(layout.hit_test(Point::new(2.0, 10.0), true), Some(Control::Overlay));
        // Bar buttons sit under the sheet and are unreachable while it is open.
        assert_ne!(layout.hit_test(layout.reset().center(), true), Some(Control::Reset));
    }

    #[test]
    fn test_choice_count_follows_max_players() {
        assert_eq!(layout().choices().len(), 6);

        let compact = Layout::new(&SurfaceConfig::new().with_max_players(5));
        assert_eq!(compact.choices().len(), 5);
        assert!(compact.choice(PlayerCount::new(5, 6).unwrap()).is_some());
        assert!(compact.choice(PlayerCount::new(6, 6).unwrap()).is_none());
    }

    #[test]
    fn test_choices_do_not_overlap() {
        let layout = layout();
        let rects: Vec<Rect> = layout.choices().iter().map(|(_, r)| *r).collect();
        for pair in rects.windows(2) {
            assert!(pair[0].right() <= pair[1].x);
        }
        for rect in &rects {
            assert!(layout.sheet().contains(rect.center()));
        }
    }

    #[test]
    fn test_choices_inside_narrowest_valid_surface() {
        let config = SurfaceConfig::new().with_size(280.0, 844.0);
        assert!(config.validate().is_ok());

        let layout = Layout::new(&config);
        for (_, rect) in layout.choices() {
            assert!(rect.x >= 0.0 && rect.right() <= config.width, "{:?}", rect);
            assert!(rect.y >= layout.sheet().y && rect.bottom() <= config.height);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Control::ConfigTrigger.to_string(), "menu");
        assert_eq!(Control::PlayerChoice(PlayerCount::new(3, 6).unwrap()).to_string(), "players 3");
    }
}
