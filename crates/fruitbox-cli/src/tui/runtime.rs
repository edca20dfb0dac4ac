use std::{io, time::Duration};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};

use super::{App, event::TuiEvent, event_loop::EventLoop};

/// Terminal runtime: owns the event loop and drives an [`App`].
///
/// Mouse capture is enabled for the whole run (selections are dragged with
/// the pointer) and released again before the terminal is restored.
#[derive(Default, Debug)]
pub struct Runtime {
    events: EventLoop,
}

impl Runtime {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the game clock interval. Pass `None` to disable ticks.
    pub fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.events.set_tick_interval(interval);
    }

    /// Sets the maximum render rate (frames per second).
    pub fn set_frame_rate(&mut self, rate: f64) {
        self.events
            .set_render_interval(Duration::from_secs_f64(1.0 / rate));
    }

    /// Restarts the tick phase so the next tick lands a full interval from
    /// now. Call when the countdown (re)starts.
    pub fn reset_tick_phase(&mut self) {
        self.events.reset_tick_phase();
    }

    /// Runs the application.
    ///
    /// 1. Calls `app.init()` for runtime configuration
    /// 2. Runs the event loop until `app.should_exit()` returns true
    ///    - `Tick`: calls `app.update()`
    ///    - `Render`: calls `app.draw()`
    ///    - `Crossterm`: calls `app.handle_event()`
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        execute!(io::stdout(), EnableMouseCapture)?;
        let result = ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Tick => {
                        app.update(&mut self);
                    }
                    TuiEvent::Render => {
                        terminal.draw(|frame| app.draw(frame))?;
                    }
                    TuiEvent::Crossterm(event) => {
                        app.handle_event(&mut self, event);
                    }
                }
            }
            Ok(())
        });
        execute!(io::stdout(), DisableMouseCapture)?;
        result
    }
}
