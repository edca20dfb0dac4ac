use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, MouseButton, MouseEvent, MouseEventKind};
use fruitbox_engine::{GameSession, MatchReport, Point};
use ratatui::{
    Frame,
    layout::{Position, Rect},
};

use crate::{
    store::HighScoreFile,
    tui::{App, Runtime},
    ui::{
        layout::screen_layout,
        widgets::{MatchFlash, SessionDisplay},
    },
};

const FRAME_RATE: f64 = 30.0;
const TICK_INTERVAL: Duration = Duration::from_secs(1);
const FLASH_DURATION: Duration = Duration::from_millis(900);

/// Interactive play screen: owns the session, the score store, and the
/// transient bits of presentation state (floating score, exit flag).
#[derive(Debug)]
pub struct PlayApp {
    session: GameSession,
    store: HighScoreFile,
    flash: Option<Flash>,
    save_error: Option<anyhow::Error>,
    is_exiting: bool,
}

#[derive(Debug)]
struct Flash {
    flash: MatchFlash,
    shown_at: Instant,
}

impl PlayApp {
    pub fn new(session: GameSession, store: HighScoreFile) -> Self {
        Self {
            session,
            store,
            flash: None,
            save_error: None,
            is_exiting: false,
        }
    }

    /// Returns the finished session plus the first persistence failure, if
    /// any, for reporting after the terminal is restored.
    pub fn into_parts(self) -> (GameSession, Option<anyhow::Error>) {
        (self.session, self.save_error)
    }

    fn handle_key(&mut self, runtime: &mut Runtime, code: KeyCode) {
        let is_running = self.session.status().is_running();
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.is_exiting = true,
            KeyCode::Char('s') | KeyCode::Enter if !is_running => {
                self.session.start();
                runtime.reset_tick_phase();
                self.flash = None;
            }
            KeyCode::Char('r') => {
                self.session.restart();
                runtime.reset_tick_phase();
                self.flash = None;
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let board_inner = Self::board_inner();
        let point = Point::new(
            f64::from(mouse.column) - f64::from(board_inner.x),
            f64::from(mouse.row) - f64::from(board_inner.y),
        );

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if board_inner.contains(Position::new(mouse.column, mouse.row)) {
                    self.session.begin_selection(point);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => self.session.update_selection(point),
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(report) = self.session.end_selection() {
                    self.on_match(&report);
                }
            }
            _ => {}
        }
    }

    /// Grid region in terminal coordinates, derived from the same layout the
    /// renderer uses.
    fn board_inner() -> Rect {
        let (width, height) = crossterm::terminal::size().unwrap_or((0, 0));
        screen_layout(Rect::new(0, 0, width, height)).board_inner
    }

    fn on_match(&mut self, report: &MatchReport) {
        self.flash = Some(Flash {
            flash: MatchFlash::new(report.points(), report.rect()),
            shown_at: Instant::now(),
        });
        if report.new_high_score() {
            self.persist_high_score();
        }
    }

    fn persist_high_score(&mut self) {
        if let Err(err) = self.store.save(self.session.high_score()) {
            // Keep the first failure; report it once the terminal is back
            let _ = self.save_error.get_or_insert(err);
        }
    }

    fn active_flash(&self) -> Option<MatchFlash> {
        self.flash
            .as_ref()
            .filter(|flash| flash.shown_at.elapsed() < FLASH_DURATION)
            .map(|flash| flash.flash)
    }
}

impl App for PlayApp {
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_interval(Some(TICK_INTERVAL));
        runtime.set_frame_rate(FRAME_RATE);
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, runtime: &mut Runtime, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(runtime, key.code),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let display = SessionDisplay::new(&self.session).flash(self.active_flash());
        frame.render_widget(display, frame.area());
    }

    fn update(&mut self, _runtime: &mut Runtime) {
        // Promotions are persisted per match; the final tick only surfaces
        // the summary, which the command layer echoes after the TUI closes.
        _ = self.session.tick();
    }
}
