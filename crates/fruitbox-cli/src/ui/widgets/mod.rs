pub use self::{
    board_display::{BoardDisplay, CELL_HEIGHT, CELL_WIDTH},
    session_display::{MatchFlash, SessionDisplay},
    stats_display::StatsDisplay,
    timer_display::TimerDisplay,
};

mod board_display;
mod session_display;
mod stats_display;
mod timer_display;

/// Palette shared by the play widgets.
pub mod color {
    use ratatui::style::Color;

    pub const APPLE: Color = Color::Red;
    pub const SELECTION: Color = Color::Yellow;
    pub const SELECTION_VALID: Color = Color::Green;
    pub const SELECTION_TEXT: Color = Color::Black;
    pub const BORDER: Color = Color::White;
    pub const BORDER_IDLE: Color = Color::DarkGray;
    pub const BORDER_ENDED: Color = Color::Red;
    pub const TIMER: Color = Color::Cyan;
    pub const TIMER_LOW: Color = Color::Red;
    pub const FLASH: Color = Color::Yellow;
    pub const HINT: Color = Color::DarkGray;
}
