use fruitbox_engine::GAME_DURATION_SECS;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Gauge, Widget},
};

use super::color;

/// Seconds left at which the gauge switches to the warning color.
const LOW_TIME_SECS: u32 = 20;

/// Countdown readout: a proportional gauge labeled `m:ss`.
#[derive(Debug)]
pub struct TimerDisplay {
    time_remaining: u32,
}

impl TimerDisplay {
    #[must_use]
    pub const fn new(time_remaining: u32) -> Self {
        Self { time_remaining }
    }
}

impl Widget for TimerDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let gauge_color = if self.time_remaining <= LOW_TIME_SECS {
            color::TIMER_LOW
        } else {
            color::TIMER
        };
        let ratio = f64::from(self.time_remaining.min(GAME_DURATION_SECS))
            / f64::from(GAME_DURATION_SECS);
        let label = format!(
            "{}:{:02}",
            self.time_remaining / 60,
            self.time_remaining % 60
        );

        Gauge::default()
            .block(Block::bordered().title("TIME"))
            .gauge_style(Style::new().fg(gauge_color))
            .ratio(ratio)
            .label(label)
            .render(area, buf);
    }
}
