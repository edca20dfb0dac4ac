use fruitbox_engine::Board;
use ratatui::layout::{Constraint, Flex, Layout, Margin, Rect};

use super::widgets::{CELL_HEIGHT, CELL_WIDTH};

/// Footprint of the bordered board widget.
#[expect(clippy::cast_possible_truncation)]
pub const BOARD_WIDGET_WIDTH: u16 = Board::WIDTH as u16 * CELL_WIDTH + 2;
#[expect(clippy::cast_possible_truncation)]
pub const BOARD_WIDGET_HEIGHT: u16 = Board::HEIGHT as u16 * CELL_HEIGHT + 2;

const SIDE_WIDTH: u16 = 19;

/// Screen regions of the play screen.
#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    /// Bordered board widget.
    pub board: Rect,
    /// Grid cells only, borders excluded. Mouse coordinates are translated
    /// relative to this region's origin.
    pub board_inner: Rect,
    pub timer: Rect,
    pub stats: Rect,
    pub help: Rect,
}

/// Splits the terminal area for the play screen.
///
/// Drawing and mouse handling both derive regions from this one function,
/// so pointer coordinates always agree with what was rendered.
#[must_use]
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let [main, help] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
    let [board_col, side_col] = Layout::horizontal([
        Constraint::Length(BOARD_WIDGET_WIDTH),
        Constraint::Length(SIDE_WIDTH),
    ])
    .flex(Flex::Center)
    .spacing(1)
    .areas(main);

    let [board] = Layout::vertical([Constraint::Length(BOARD_WIDGET_HEIGHT)])
        .flex(Flex::Center)
        .areas(board_col);
    let [side] = Layout::vertical([Constraint::Length(BOARD_WIDGET_HEIGHT)])
        .flex(Flex::Center)
        .areas(side_col);
    let [timer, stats] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(9)]).areas(side);

    ScreenLayout {
        board,
        board_inner: board.inner(Margin::new(1, 1)),
        timer,
        stats,
        help,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_region_matches_grid_footprint() {
        let layout = screen_layout(Rect::new(0, 0, 100, 30));

        assert_eq!(layout.board.width, BOARD_WIDGET_WIDTH);
        assert_eq!(layout.board.height, BOARD_WIDGET_HEIGHT);
        assert_eq!(layout.board_inner.width, BOARD_WIDGET_WIDTH - 2);
        assert_eq!(layout.board_inner.height, BOARD_WIDGET_HEIGHT - 2);
        assert_eq!(layout.board_inner.x, layout.board.x + 1);
        assert_eq!(layout.board_inner.y, layout.board.y + 1);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let area = Rect::new(0, 0, 120, 40);
        let a = screen_layout(area);
        let b = screen_layout(area);

        assert_eq!(a.board, b.board);
        assert_eq!(a.board_inner, b.board_inner);
    }
}
