use crossterm::event::Event;
use ratatui::Frame;

use crate::tui::Runtime;

/// Application driven by [`Runtime::run`].
pub trait App {
    /// Configures the runtime (tick interval, frame rate) before the loop
    /// starts.
    fn init(&mut self, runtime: &mut Runtime);

    /// Returns whether the loop should stop.
    fn should_exit(&self) -> bool;

    /// Handles one terminal event (key, mouse, resize).
    fn handle_event(&mut self, runtime: &mut Runtime, event: Event);

    /// Renders the screen (called on each render deadline).
    fn draw(&self, frame: &mut Frame);

    /// Advances game logic by one clock tick.
    fn update(&mut self, runtime: &mut Runtime);
}
