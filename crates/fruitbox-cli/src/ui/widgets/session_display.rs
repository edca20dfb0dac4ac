use fruitbox_engine::{CellRect, GameSession, SessionStatus};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Clear, Widget},
};

use crate::ui::layout::screen_layout;

use super::{BoardDisplay, CELL_HEIGHT, CELL_WIDTH, StatsDisplay, TimerDisplay, color};

/// Transient floating score indicator shown after a match.
#[derive(Debug, Clone, Copy)]
pub struct MatchFlash {
    points: usize,
    rect: CellRect,
}

impl MatchFlash {
    #[must_use]
    pub const fn new(points: usize, rect: CellRect) -> Self {
        Self { points, rect }
    }
}

/// Full play screen: board, timer, score panel, help line, and the status
/// overlays (start prompt, time's-up summary, floating score).
#[derive(Debug)]
pub struct SessionDisplay<'a> {
    session: &'a GameSession,
    flash: Option<MatchFlash>,
}

impl<'a> SessionDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            flash: None,
        }
    }

    pub fn flash(self, flash: Option<MatchFlash>) -> Self {
        Self { flash, ..self }
    }
}

impl Widget for SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = screen_layout(area);

        let border_color = match self.session.status() {
            SessionStatus::NotStarted => color::BORDER_IDLE,
            SessionStatus::Running => color::BORDER,
            SessionStatus::Ended => color::BORDER_ENDED,
        };
        let board_block = Block::bordered()
            .title(Line::from(" FRUIT BOX ").centered())
            .border_style(Style::new().fg(border_color));
        BoardDisplay::new(self.session.board())
            .selection(self.session.selection_preview())
            .block(board_block)
            .render(layout.board, buf);

        TimerDisplay::new(self.session.time_remaining()).render(layout.timer, buf);
        StatsDisplay::new(self.session)
            .block(Block::bordered().title("SCORE"))
            .render(layout.stats, buf);

        let help = match self.session.status() {
            SessionStatus::NotStarted => "S (Start) | Q (Quit)",
            SessionStatus::Running => "Drag a box summing to 10 | R (Restart) | Q (Quit)",
            SessionStatus::Ended => "S (Play Again) | R (Restart) | Q (Quit)",
        };
        Text::from(help)
            .style(Style::new().fg(color::HINT))
            .centered()
            .render(layout.help, buf);

        if let Some(flash) = self.flash {
            render_flash(flash, layout.board_inner, buf);
        }

        match self.session.status() {
            SessionStatus::NotStarted => {
                render_popup(
                    Text::from("PRESS S TO START"),
                    Style::new().fg(Color::Black).bg(Color::Yellow),
                    layout.board,
                    buf,
                );
            }
            SessionStatus::Running => {}
            SessionStatus::Ended => {
                if let Some(summary) = self.session.summary() {
                    let mut lines = vec![
                        Line::from("TIME'S UP!"),
                        Line::from(format!("FINAL SCORE {}", summary.score())),
                    ];
                    if summary.new_high_score() {
                        lines.push(Line::from("NEW BEST!"));
                    }
                    render_popup(
                        Text::from(lines),
                        Style::new().fg(Color::White).bg(Color::Red),
                        layout.board,
                        buf,
                    );
                }
            }
        }
    }
}

#[expect(clippy::cast_possible_truncation)]
fn render_flash(flash: MatchFlash, board_inner: Rect, buf: &mut Buffer) {
    let rect = flash.rect;
    let text = format!("+{}", flash.points);

    let center_x = board_inner.x + ((rect.left() + rect.right() + 1) as u16 * CELL_WIDTH) / 2;
    let center_y = board_inner.y + ((rect.top() + rect.bottom() + 1) as u16 * CELL_HEIGHT) / 2;
    let x = center_x
        .saturating_sub(text.len() as u16 / 2)
        .min(board_inner.right().saturating_sub(text.len() as u16));

    buf.set_string(
        x,
        center_y.min(board_inner.bottom().saturating_sub(1)),
        text,
        Style::new().fg(color::FLASH).add_modifier(Modifier::BOLD),
    );
}

#[expect(clippy::cast_possible_truncation)]
fn render_popup(text: Text<'_>, style: Style, board_area: Rect, buf: &mut Buffer) {
    let text_height = text.height() as u16;
    let area = board_area.centered(
        Constraint::Length(board_area.width.saturating_sub(8)),
        Constraint::Length(text_height + 2),
    );
    let block = Block::new().style(style);
    let inner = block.inner(area);
    Clear.render(area, buf);
    block.render(area, buf);
    text.style(style)
        .centered()
        .render(inner.centered_vertically(Constraint::Length(text_height)), buf);
}
