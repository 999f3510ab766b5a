//! Terminal UI: scene rendering plus the screen geometry shared between
//! the renderer and mouse hit-testing.

pub mod flappy_scene;

use crate::game::types::FlappyGame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

/// Width and height of the centered overlay panels, borders included.
const PANEL_WIDTH: u16 = 34;
const PANEL_HEIGHT: u16 = 9;

/// Named screen regions inside the outer border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// The scrolling play field.
    pub play_area: Rect,
    /// Two-line status bar under the field.
    pub status_bar: Rect,
}

/// Compute the screen regions for the given terminal area.
///
/// Pure function of the area, so the renderer and the mouse handler always
/// agree on what lives where.
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let inner = Block::default().borders(Borders::ALL).inner(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(2)])
        .split(inner);

    ScreenLayout {
        play_area: chunks[0],
        status_bar: chunks[1],
    }
}

/// Center a panel of the given size within `area`, shrinking it to fit.
pub fn centered_panel(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// The game-over panel, centered in the play area.
pub fn game_over_panel(play_area: Rect) -> Rect {
    centered_panel(play_area, PANEL_WIDTH, PANEL_HEIGHT)
}

/// The clickable restart row inside the game-over panel.
///
/// Sits on the sixth content line of the panel; `flappy_scene` draws the
/// button text on that same line.
pub fn restart_button(play_area: Rect) -> Rect {
    let inner = Block::default()
        .borders(Borders::ALL)
        .inner(game_over_panel(play_area));
    if inner.height < 6 {
        return Rect::new(inner.x, inner.y, 0, 0);
    }
    Rect::new(inner.x, inner.y + 5, inner.width, 1)
}

/// Point-in-rect test for mouse events.
pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}

/// Draw one frame of the current game state.
pub fn draw_ui(frame: &mut Frame, game: &FlappyGame, best_score: u32) {
    flappy_scene::render_flappy(frame, frame.size(), game, best_score);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_layout_splits_field_and_status() {
        let layout = screen_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.play_area, Rect::new(1, 1, 78, 20));
        assert_eq!(layout.status_bar, Rect::new(1, 21, 78, 2));
    }

    #[test]
    fn test_screen_layout_degrades_without_panic() {
        let layout = screen_layout(Rect::new(0, 0, 12, 6));
        let inner_height = layout.play_area.height + layout.status_bar.height;
        assert_eq!(inner_height, 4);
        assert!(layout.play_area.y <= layout.status_bar.y);
    }

    #[test]
    fn test_game_over_panel_is_centered_and_contained() {
        let play = Rect::new(1, 1, 78, 20);
        let panel = game_over_panel(play);
        assert_eq!(panel, Rect::new(23, 6, 34, 9));
        assert!(panel.x >= play.x && panel.y >= play.y);
        assert!(panel.x + panel.width <= play.x + play.width);
        assert!(panel.y + panel.height <= play.y + play.height);
    }

    #[test]
    fn test_restart_button_sits_on_its_panel_line() {
        let play = Rect::new(1, 1, 78, 20);
        let panel = game_over_panel(play);
        let button = restart_button(play);

        assert_eq!(button.y, panel.y + 6);
        assert_eq!(button.height, 1);
        assert!(button.x > panel.x);
        assert!(button.x + button.width < panel.x + panel.width);
    }

    #[test]
    fn test_restart_button_vanishes_on_tiny_terminal() {
        let button = restart_button(Rect::new(0, 0, 10, 5));
        assert_eq!(button.width, 0);
        assert!(!contains(button, button.x, button.y));
    }

    #[test]
    fn test_contains_edges() {
        let rect = Rect::new(5, 5, 10, 2);
        assert!(contains(rect, 5, 5));
        assert!(contains(rect, 14, 6));
        assert!(!contains(rect, 15, 5));
        assert!(!contains(rect, 4, 5));
        assert!(!contains(rect, 5, 7));
    }

    #[test]
    fn test_restart_button_is_inside_the_play_area() {
        // The dispatcher tests the button before the field, which only
        // works because the button never escapes the play area.
        let play = Rect::new(1, 1, 78, 20);
        let button = restart_button(play);
        assert!(contains(play, button.x, button.y));
        assert!(contains(play, button.x + button.width - 1, button.y));
    }
}
