//! Pure rendering of a surface.
//!
//! `SurfaceView::of` turns surface state into a flat description of what to
//! draw; `SurfaceView::paint` turns that into a text frame for terminals.
//! Neither touches the surface, so a front end can rebuild the view after
//! every revision.

use serde::{Deserialize, Serialize};

use crate::core::config::Theme;
use crate::core::marker::{Point, SequenceNumber, MARKER_LIMIT};
use crate::core::player::PlayerCount;

use super::state::{SelectionSurface, SurfacePhase};

/// Label drawn on every marker under `Theme::Icon`.
pub const MARKER_ICON: &str = "*";

/// Visual treatment of a marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerStyle {
    /// Placed, not selected.
    Idle,
    /// In the current selection (pulsing highlight).
    Highlighted,
}

/// One marker as it should be drawn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderedMarker {
    pub sequence: SequenceNumber,
    pub position: Point,
    pub label: String,
    pub style: MarkerStyle,
}

/// Everything needed to draw a surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfaceView {
    pub width: f32,
    pub height: f32,
    pub phase: SurfacePhase,
    pub markers: Vec<RenderedMarker>,
    pub players: PlayerCount,
    /// Player-count choices with the active one flagged.
    pub choices: Vec<(PlayerCount, bool)>,
    pub sheet_open: bool,
}

impl SurfaceView {
    /// Describe the current state of `surface`.
    #[must_use]
    pub fn of(surface: &SelectionSurface) -> Self {
        let config = surface.config();
        let players = surface.player_count();

        let markers = surface
            .markers()
            .iter()
            .map(|m| RenderedMarker {
                sequence: m.sequence,
                position: m.position,
                label: match config.theme {
                    Theme::Numbered => m.sequence.to_string(),
                    Theme::Icon => MARKER_ICON.to_string(),
                },
                style: if surface.is_selected(m.sequence) {
                    MarkerStyle::Highlighted
                } else {
                    MarkerStyle::Idle
                },
            })
            .collect();

        Self {
            width: config.width,
            height: config.height,
            phase: surface.phase(),
            markers,
            players,
            choices: PlayerCount::choices(config.max_players)
                .map(|n| (n, n == players))
                .collect(),
            sheet_open: surface.is_sheet_open(),
        }
    }

    /// Markers drawn with the highlight.
    pub fn highlighted(&self) -> impl Iterator<Item = &RenderedMarker> {
        self.markers
            .iter()
            .filter(|m| m.style == MarkerStyle::Highlighted)
    }

    /// Paint a text frame with a `cols` x `rows` drawing area.
    ///
    /// Idle markers are drawn as `[label]`, highlighted ones as `<label>`,
    /// centred on their scaled position. Later markers overwrite earlier ones
    /// where they overlap.
    #[must_use]
    pub fn paint(&self, cols: usize, rows: usize) -> String {
        let cols = cols.max(3);
        let rows = rows.max(1);
        let mut grid = vec![vec![' '; cols]; rows];

        for marker in &self.markers {
            let (open, close) = match marker.style {
                MarkerStyle::Idle => ('[', ']'),
                MarkerStyle::Highlighted => ('<', '>'),
            };
            let cell: Vec<char> = std::iter::once(open)
                .chain(marker.label.chars())
                .chain(std::iter::once(close))
                .collect();

            let col = scale(marker.position.x, self.width, cols);
            let row = scale(marker.position.y, self.height, rows);
            let start = col
                .saturating_sub(cell.len() / 2)
                .min(cols.saturating_sub(cell.len()));

            for (offset, ch) in cell.into_iter().enumerate() {
                if let Some(slot) = grid[row].get_mut(start + offset) {
                    *slot = ch;
                }
            }
        }

        let border = format!("+{}+", "-".repeat(cols));
        let mut out = String::new();
        out.push_str(&border);
        out.push('\n');
        for line in grid {
            out.push('|');
            out.extend(line);
            out.push_str("|\n");
        }
        out.push_str(&border);
        out.push('\n');

        out.push_str(&format!(
            " {}  players: {}  markers: {}/{}\n",
            self.phase,
            self.players,
            self.markers.len(),
            MARKER_LIMIT
        ));
        out.push_str(" (reset)  (play)  (menu)\n");

        if self.sheet_open {
            out.push_str(" how many players?");
            for (n, active) in &self.choices {
                if *active {
                    out.push_str(&format!(" [{}]", n));
                } else {
                    out.push_str(&format!(" {}", n));
                }
            }
            out.push('\n');
        }

        out
    }
}

/// Map a surface coordinate onto `0..cells`.
fn scale(value: f32, extent: f32, cells: usize) -> usize {
    if extent <= 0.0 || value <= 0.0 {
        return 0;
    }
    let cell = (value / extent * cells as f32) as usize;
    cell.min(cells - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SurfaceConfig;

    fn surface(config: SurfaceConfig) -> SelectionSurface {
        SelectionSurface::new(config.with_seed(5).with_size(400.0, 800.0)).unwrap()
    }

    #[test]
    fn test_view_styles() {
        let mut surface = surface(SurfaceConfig::new());
        surface.set_player_count(2).unwrap();
        for x in [50.0, 150.0, 250.0] {
            surface.place(Point::new(x, 100.0)).unwrap();
        }

        let view = SurfaceView::of(&surface);
        assert!(view.highlighted().next().is_none());

        surface.play().unwrap();
        let view = SurfaceView::of(&surface);
        assert_eq!(view.highlighted().count(), 2);
        for marker in view.highlighted() {
            assert!(surface.selection().contains(marker.sequence));
        }
        let labels: Vec<&str> = view.markers.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_icon_theme() {
        let mut surface = surface(SurfaceConfig::new().with_theme(Theme::Icon));
        surface.place(Point::new(10.0, 10.0)).unwrap();

        let view = SurfaceView::of(&surface);
        assert_eq!(view.markers[0].label, MARKER_ICON);
    }

    #[test]
    fn test_active_choice() {
        let mut surface = surface(SurfaceConfig::new());
        surface.set_player_count(4).unwrap();

        let view = SurfaceView::of(&surface);
        let active: Vec<u8> = view
            .choices
            .iter()
            .filter(|(_, active)| *active)
            .map(|(n, _)| n.get())
            .collect();
        assert_eq!(active, vec![4]);
        assert_eq!(view.choices.len(), 6);
    }

    #[test]
    fn test_paint_positions() {
        let mut surface = surface(SurfaceConfig::new());
        surface.place(Point::new(0.0, 0.0)).unwrap();
        surface.place(Point::new(200.0, 400.0)).unwrap();
        surface.play().unwrap();

        let frame = SurfaceView::of(&surface).paint(20, 4);
        let lines: Vec<&str> = frame.lines().collect();

        assert_eq!(lines[0], format!("+{}+", "-".repeat(20)));
        // Marker 1 clamps into the top-left corner.
        assert!(lines[1].starts_with("|[1]") || lines[1].starts_with("|<1>"));
        // Marker 2 sits centred in the third row.
        assert!(lines[3].contains("2"));
        assert!(frame.contains(" selected  players: 1  markers: 2/6"));
        assert!(!frame.contains("how many players?"));
    }

    #[test]
    fn test_paint_sheet() {
        let mut surface = surface(SurfaceConfig::new().with_max_players(5));
        surface.set_player_count(3).unwrap();
        surface.open_sheet();

        let frame = SurfaceView::of(&surface).paint(10, 2);
        assert!(frame.contains(" how many players? 1 2 [3] 4 5\n"));
    }

    #[test]
    fn test_scale() {
        assert_eq!(scale(0.0, 100.0, 10), 0);
        assert_eq!(scale(55.0, 100.0, 10), 5);
        assert_eq!(scale(100.0, 100.0, 10), 9);
        assert_eq!(scale(-5.0, 100.0, 10), 0);
    }
}
