use fruitbox_engine::{Board, CellPos, SelectionPreview};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BlockExt as _, Widget},
};

use super::color;

/// Character-cell footprint of one grid cell.
pub const CELL_WIDTH: u16 = 3;
pub const CELL_HEIGHT: u16 = 2;

/// Renders the 17×10 grid with the live selection overlay.
///
/// Apples are bold digits; the active selection is a background highlight
/// over its whole rectangle, green once the rectangle currently matches.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    selection: Option<SelectionPreview>,
    block: Option<Block<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            selection: None,
            block: None,
        }
    }

    pub fn selection(self, selection: Option<SelectionPreview>) -> Self {
        Self { selection, ..self }
    }

    pub fn block(self, block: Block<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    #[expect(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let inner = self.block.inner_if_some(area);

        for (row, cells) in self.board.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let x = inner.x + col as u16 * CELL_WIDTH;
                let y = inner.y + row as u16 * CELL_HEIGHT;
                if x + CELL_WIDTH > inner.right() || y + CELL_HEIGHT > inner.bottom() {
                    // Terminal too small; clip rather than wrap
                    continue;
                }

                let selected = self
                    .selection
                    .filter(|preview| preview.rect().contains(CellPos::new(row, col)));
                let style = match selected {
                    Some(preview) if preview.is_valid() => Style::new()
                        .fg(color::SELECTION_TEXT)
                        .bg(color::SELECTION_VALID),
                    Some(_) => Style::new().fg(color::SELECTION_TEXT).bg(color::SELECTION),
                    None => Style::new().fg(color::APPLE),
                };
                if selected.is_some() {
                    buf.set_style(Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT), style);
                }
                if let Some(value) = cell.value() {
                    buf.set_string(
                        x + CELL_WIDTH / 2,
                        y + (CELL_HEIGHT - 1) / 2,
                        value.to_string(),
                        style.add_modifier(Modifier::BOLD),
                    );
                }
            }
        }
    }
}
