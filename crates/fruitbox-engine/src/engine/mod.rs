//! Game logic and session state management.
//!
//! This module provides the high-level logic that orchestrates the core data
//! structures into a playable session:
//!
//! - [`GameField`] - Playing state for one board (grid plus active selection)
//! - [`GameSession`] - Complete timed session with clock, score, and stats
//! - [`GameStats`] - Per-session match counters
//! - [`ScoreLedger`] - Running score and best-score promotion
//!
//! # Game Flow
//!
//! A session progresses as follows:
//!
//! 1. Create a [`GameSession`] with the stored best score
//! 2. `start()` fills a fresh grid and arms the 120-second clock
//! 3. Pointer input drives `begin_selection` / `update_selection` /
//!    `end_selection`; rectangles whose apples sum to exactly 10 are cleared
//!    and scored
//! 4. The owner calls `tick()` once per elapsed second; the tick that
//!    reaches zero ends the session and surfaces the final summary
//! 5. `restart()` at any point behaves exactly like a fresh start
//!
//! The session never schedules anything itself: `tick()` is callable by any
//! timing source (TUI event loop, test harness), which keeps clock logic
//! independent of timer mechanics.
//!
//! # Example
//!
//! ```
//! use fruitbox_engine::{CellMetrics, GameSession, Point};
//!
//! let metrics = CellMetrics::new(10.0, 10.0);
//! let mut session = GameSession::new(metrics, 0);
//! session.start();
//!
//! session.begin_selection(Point::new(5.0, 5.0));
//! session.update_selection(Point::new(25.0, 5.0));
//! if let Some(report) = session.end_selection() {
//!     println!("+{} points", report.points());
//! }
//! ```

pub use self::{game_field::*, game_session::*, game_stats::*, score_ledger::*};

mod game_field;
mod game_session;
mod game_stats;
mod score_ledger;
