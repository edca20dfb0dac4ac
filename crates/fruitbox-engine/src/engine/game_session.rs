use crate::core::{Board, BoardSeed, CellMetrics, CellRect, Point};

use super::{GameField, GameStats, ScoreLedger, SelectionPreview, match_points};

/// Session length in seconds.
pub const GAME_DURATION_SECS: u32 = 120;

/// Lifecycle of one timed play-through.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionStatus {
    NotStarted,
    Running,
    Ended,
}

/// Outcome of one resolved match, surfaced for scoring display and
/// high-score persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchReport {
    rect: CellRect,
    apples: usize,
    points: usize,
    new_high_score: bool,
}

impl MatchReport {
    #[must_use]
    pub const fn rect(&self) -> CellRect {
        self.rect
    }

    #[must_use]
    pub const fn apples(&self) -> usize {
        self.apples
    }

    #[must_use]
    pub const fn points(&self) -> usize {
        self.points
    }

    /// Whether this match pushed the score past the stored best, and the
    /// caller should persist it.
    #[must_use]
    pub const fn new_high_score(&self) -> bool {
        self.new_high_score
    }
}

/// Final result of an ended session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    score: usize,
    high_score: usize,
    new_high_score: bool,
}

impl SessionSummary {
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub const fn high_score(&self) -> usize {
        self.high_score
    }

    /// Whether this session set a new best score at any point.
    #[must_use]
    pub const fn new_high_score(&self) -> bool {
        self.new_high_score
    }
}

/// One complete game: grid, selection, countdown clock, and scores.
///
/// The session is tick-driven: it never schedules anything itself. The
/// owner calls [`Self::tick`] once per elapsed second from whatever timing
/// source it has (TUI event loop, test harness, game loop), which keeps the
/// clock logic independent of the timer mechanism. With a single owner there
/// is exactly one tick source, and the clock additionally refuses to move
/// unless the session is running, so a stray or duplicated tick can neither
/// drive the clock below zero nor end a session twice.
///
/// All input operations are inert unless the session is running; ending the
/// session cancels any drag still in flight.
#[derive(Debug, Clone)]
pub struct GameSession {
    field: GameField,
    stats: GameStats,
    ledger: ScoreLedger,
    status: SessionStatus,
    time_remaining: u32,
    new_high_score: bool,
    metrics: CellMetrics,
}

impl GameSession {
    /// Creates a not-yet-started session carrying the stored best score.
    ///
    /// The grid is already filled so the front end has something to show
    /// behind the start prompt; [`Self::start`] draws a fresh one.
    #[must_use]
    pub fn new(metrics: CellMetrics, high_score: usize) -> Self {
        Self::with_field(GameField::new(metrics), metrics, high_score)
    }

    /// Like [`Self::new`] with a fixed first board.
    #[must_use]
    pub fn with_seed(seed: BoardSeed, metrics: CellMetrics, high_score: usize) -> Self {
        Self::with_field(GameField::with_seed(seed, metrics), metrics, high_score)
    }

    /// Like [`Self::new`] over an explicit board (tests, replays).
    #[must_use]
    pub fn with_board(board: Board, metrics: CellMetrics, high_score: usize) -> Self {
        Self::with_field(GameField::with_board(board, metrics), metrics, high_score)
    }

    fn with_field(field: GameField, metrics: CellMetrics, high_score: usize) -> Self {
        Self {
            field,
            stats: GameStats::new(),
            ledger: ScoreLedger::new(high_score),
            status: SessionStatus::NotStarted,
            time_remaining: GAME_DURATION_SECS,
            new_high_score: false,
            metrics,
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        self.field.board()
    }

    #[must_use]
    pub const fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub const fn status(&self) -> &SessionStatus {
        &self.status
    }

    #[must_use]
    pub const fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.ledger.score()
    }

    #[must_use]
    pub const fn high_score(&self) -> usize {
        self.ledger.high_score()
    }

    #[must_use]
    pub fn selection_preview(&self) -> Option<SelectionPreview> {
        self.field.selection_preview()
    }

    /// Final result, present once the session has ended.
    #[must_use]
    pub fn summary(&self) -> Option<SessionSummary> {
        self.status.is_ended().then(|| SessionSummary {
            score: self.ledger.score(),
            high_score: self.ledger.high_score(),
            new_high_score: self.new_high_score,
        })
    }

    /// Starts a session: fresh grid, zero score, full clock.
    ///
    /// Callable from any state; a running session is simply abandoned, which
    /// makes restart identical to a fresh start by construction.
    pub fn start(&mut self) {
        self.field = GameField::new(self.metrics);
        self.stats = GameStats::new();
        self.ledger.reset_score();
        self.status = SessionStatus::Running;
        self.time_remaining = GAME_DURATION_SECS;
        self.new_high_score = false;
    }

    /// Identical to [`Self::start`]; reads better at call sites that abort a
    /// session in progress.
    pub fn restart(&mut self) {
        self.start();
    }

    /// Advances the countdown by one second.
    ///
    /// No-op unless the session is running. The tick that reaches zero ends
    /// the session, cancels any in-flight selection, runs the final
    /// best-score comparison, and returns the summary; later ticks return
    /// `None` without touching the clock.
    pub fn tick(&mut self) -> Option<SessionSummary> {
        if !self.status.is_running() {
            return None;
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining > 0 {
            return None;
        }
        self.status = SessionStatus::Ended;
        self.field.cancel_selection();
        if self.ledger.maybe_promote_high_score() {
            self.new_high_score = true;
        }
        self.summary()
    }

    /// Begins a drag selection at `point`. Inert unless running.
    pub fn begin_selection(&mut self, point: Point) {
        if self.status.is_running() {
            self.field.begin_selection(point);
        }
    }

    /// Moves the selection cursor to `point`. Inert unless running.
    pub fn update_selection(&mut self, point: Point) {
        if self.status.is_running() {
            self.field.update_selection(point);
        }
    }

    /// Releases the selection and resolves it.
    ///
    /// A matching rectangle clears its apples, scores
    /// `apples*10 + max(0, apples-2)*5` points, and may promote the best
    /// score. Anything else (wrong sum, all-empty rectangle, or a release
    /// arriving after the session ended) has no effect.
    pub fn end_selection(&mut self) -> Option<MatchReport> {
        if !self.status.is_running() {
            self.field.cancel_selection();
            return None;
        }
        let clear = self.field.end_selection()?;
        let points = match_points(clear.apples());
        self.ledger.record(points);
        self.stats.complete_match(clear.apples());
        let new_high_score = self.ledger.maybe_promote_high_score();
        if new_high_score {
            self.new_high_score = true;
        }
        Some(MatchReport {
            rect: clear.rect(),
            apples: clear.apples(),
            points,
            new_high_score,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{BOARD_HEIGHT, BOARD_WIDTH, CellPos};

    use super::*;

    fn metrics() -> CellMetrics {
        CellMetrics::new(1.0, 1.0)
    }

    fn session_with(art: &str) -> GameSession {
        let mut session = GameSession::with_board(Board::from_ascii(art), metrics(), 0);
        // Flip straight to Running without replacing the fixture board
        session.status = SessionStatus::Running;
        session
    }

    fn drag(session: &mut GameSession, from: (f64, f64), to: (f64, f64)) -> Option<MatchReport> {
        session.begin_selection(Point::new(from.0, from.1));
        session.update_selection(Point::new(to.0, to.1));
        session.end_selection()
    }

    #[test]
    fn test_new_session_is_not_started_with_full_clock() {
        let session = GameSession::new(metrics(), 42);

        assert!(session.status().is_not_started());
        assert_eq!(session.time_remaining(), GAME_DURATION_SECS);
        assert_eq!(session.score(), 0);
        assert_eq!(session.high_score(), 42);
        assert_eq!(session.board().remaining_apples(), BOARD_WIDTH * BOARD_HEIGHT);
        assert!(session.summary().is_none());
    }

    #[test]
    fn test_start_resets_everything() {
        let mut session = session_with(
            r"
            55...............
            ",
        );
        drag(&mut session, (0.0, 0.0), (1.0, 0.0)).expect("5+5 matches");
        assert_eq!(session.score(), 20);

        session.start();

        assert!(session.status().is_running());
        assert_eq!(session.score(), 0);
        assert_eq!(session.time_remaining(), GAME_DURATION_SECS);
        assert_eq!(session.stats().matches(), 0);
        // A fresh full grid replaced the fixture
        assert_eq!(session.board().remaining_apples(), BOARD_WIDTH * BOARD_HEIGHT);
    }

    #[test]
    fn test_tick_is_inert_before_start() {
        let mut session = GameSession::new(metrics(), 0);

        assert_eq!(session.tick(), None);
        assert_eq!(session.time_remaining(), GAME_DURATION_SECS);
        assert!(session.status().is_not_started());
    }

    #[test]
    fn test_full_countdown_ends_exactly_once() {
        let mut session = GameSession::new(metrics(), 0);
        session.start();

        for _ in 0..GAME_DURATION_SECS - 1 {
            assert_eq!(session.tick(), None);
        }
        assert_eq!(session.time_remaining(), 1);
        assert!(session.status().is_running());

        let summary = session.tick().expect("final tick surfaces the summary");
        assert_eq!(summary.score(), 0);
        assert!(session.status().is_ended());
        assert_eq!(session.time_remaining(), 0);

        // Mistakenly delivered extra ticks change nothing
        for _ in 0..3 {
            assert_eq!(session.tick(), None);
        }
        assert_eq!(session.time_remaining(), 0);
        assert!(session.status().is_ended());
    }

    #[test]
    fn test_restart_mid_session_yields_a_fresh_full_clock() {
        let mut session = GameSession::new(metrics(), 0);
        session.start();
        for _ in 0..30 {
            session.tick();
        }
        assert_eq!(session.time_remaining(), GAME_DURATION_SECS - 30);

        session.restart();
        assert_eq!(session.time_remaining(), GAME_DURATION_SECS);
        assert!(session.status().is_running());

        // Two rapid restarts behave like one
        session.restart();
        session.restart();
        assert_eq!(session.time_remaining(), GAME_DURATION_SECS);
        session.tick();
        assert_eq!(session.time_remaining(), GAME_DURATION_SECS - 1);
    }

    #[test]
    fn test_selection_is_inert_unless_running() {
        let mut session = GameSession::new(metrics(), 0);

        session.begin_selection(Point::new(0.0, 0.0));
        assert!(session.selection_preview().is_none());
        assert_eq!(session.end_selection(), None);
    }

    #[test]
    fn test_match_scores_and_updates_stats() {
        let mut session = session_with(
            r"
            1234.............
            ",
        );

        let report = drag(&mut session, (0.0, 0.0), (3.0, 0.0)).expect("1+2+3+4 = 10");
        assert_eq!(report.apples(), 4);
        assert_eq!(report.points(), 4 * 10 + 2 * 5);
        assert!(report.new_high_score());

        assert_eq!(session.score(), 50);
        assert_eq!(session.high_score(), 50);
        assert_eq!(session.stats().matches(), 1);
        assert_eq!(session.stats().apples_cleared(), 4);
        assert_eq!(session.stats().largest_match(), 4);
    }

    #[test]
    fn test_failed_match_changes_nothing() {
        let mut session = session_with(
            r"
            99...............
            ",
        );

        assert_eq!(drag(&mut session, (0.0, 0.0), (1.0, 0.0)), None);
        assert_eq!(session.score(), 0);
        assert_eq!(session.stats().matches(), 0);
        assert_eq!(session.board().cell(CellPos::new(0, 0)).unwrap().value(), Some(9));
    }

    #[test]
    fn test_high_score_promotion_happens_per_match() {
        let mut session = session_with(
            r"
            5555.............
            ",
        );
        session.ledger = ScoreLedger::new(30);

        let first = drag(&mut session, (0.0, 0.0), (1.0, 0.0)).unwrap();
        assert_eq!(session.score(), 20);
        assert!(!first.new_high_score());

        let second = drag(&mut session, (2.0, 0.0), (3.0, 0.0)).unwrap();
        assert_eq!(session.score(), 40);
        assert!(second.new_high_score());
        assert_eq!(session.high_score(), 40);
    }

    #[test]
    fn test_session_end_cancels_inflight_selection_and_keeps_flag() {
        let mut session = session_with(
            r"
            55...............
            ",
        );
        session.time_remaining = 1;

        drag(&mut session, (0.0, 0.0), (1.0, 0.0)).unwrap();
        session.begin_selection(Point::new(5.0, 0.0));

        let summary = session.tick().expect("clock expired");
        assert!(session.selection_preview().is_none());
        assert_eq!(session.end_selection(), None);

        assert_eq!(summary.score(), 20);
        assert_eq!(summary.high_score(), 20);
        assert!(summary.new_high_score());
        assert_eq!(session.summary(), Some(summary));
    }

    #[test]
    fn test_summary_without_any_match_keeps_old_best() {
        let mut session = GameSession::with_board(Board::from_ascii("55..............."), metrics(), 90);
        session.status = SessionStatus::Running;
        session.time_remaining = 1;

        let summary = session.tick().unwrap();
        assert_eq!(summary.score(), 0);
        assert_eq!(summary.high_score(), 90);
        assert!(!summary.new_high_score());
    }
}
