use crossterm::event::Event as CrosstermEvent;

/// Events multiplexed by the play loop.
#[derive(Debug, Clone, derive_more::From)]
pub(super) enum TuiEvent {
    /// Game clock tick (one per `tick_interval`).
    Tick,
    /// Screen redraw deadline.
    Render,
    /// Terminal input: keys, mouse, resize.
    Crossterm(CrosstermEvent),
}
