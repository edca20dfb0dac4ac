use crate::core::{Board, BoardSeed, CellMetrics, CellRect, Point, SelectionTracker};

/// Digit sum a selection must reach exactly to match.
pub const MATCH_SUM: u32 = 10;

/// Live summary of the in-progress selection rectangle.
///
/// Recomputed from the board on demand, so the front end can show whether
/// the rectangle currently matches before the pointer is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionPreview {
    rect: CellRect,
    sum: u32,
    apples: usize,
}

impl SelectionPreview {
    #[must_use]
    pub const fn rect(&self) -> CellRect {
        self.rect
    }

    #[must_use]
    pub const fn sum(&self) -> u32 {
        self.sum
    }

    #[must_use]
    pub const fn apples(&self) -> usize {
        self.apples
    }

    /// A rectangle matches when its apples sum to exactly [`MATCH_SUM`].
    /// An all-empty rectangle never matches.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.sum == MATCH_SUM && self.apples > 0
    }
}

/// Result of resolving a released selection that matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchClear {
    rect: CellRect,
    apples: usize,
}

impl MatchClear {
    #[must_use]
    pub const fn rect(&self) -> CellRect {
        self.rect
    }

    /// How many apples the match removed.
    #[must_use]
    pub const fn apples(&self) -> usize {
        self.apples
    }
}

/// Playing state for one board: the grid plus the active selection.
#[derive(Debug, Clone)]
pub struct GameField {
    board: Board,
    tracker: SelectionTracker,
}

impl GameField {
    #[must_use]
    pub fn new(metrics: CellMetrics) -> Self {
        Self::with_board(Board::new(), metrics)
    }

    /// Like [`Self::new`] with a deterministic board fill.
    #[must_use]
    pub fn with_seed(seed: BoardSeed, metrics: CellMetrics) -> Self {
        Self::with_board(Board::with_seed(seed), metrics)
    }

    /// Builds a field over an explicit board. Useful for tests and replays.
    #[must_use]
    pub const fn with_board(board: Board, metrics: CellMetrics) -> Self {
        Self {
            board,
            tracker: SelectionTracker::new(metrics),
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Rectangle, sum, and apple count of the active selection.
    #[must_use]
    pub fn selection_preview(&self) -> Option<SelectionPreview> {
        let rect = self.tracker.current_rect()?;
        Some(self.preview_of(rect))
    }

    fn preview_of(&self, rect: CellRect) -> SelectionPreview {
        SelectionPreview {
            rect,
            sum: self.board.sum(rect),
            apples: self.board.apple_count(rect),
        }
    }

    pub fn begin_selection(&mut self, point: Point) {
        self.tracker.begin(point);
    }

    pub fn update_selection(&mut self, point: Point) {
        self.tracker.update(point);
    }

    pub fn cancel_selection(&mut self) {
        self.tracker.cancel();
    }

    /// Ends the active selection and resolves it.
    ///
    /// A matching rectangle has every apple inside it cleared and is
    /// reported back; anything else (wrong sum, all-empty rectangle, no
    /// active selection) leaves the board untouched and returns `None`.
    pub fn end_selection(&mut self) -> Option<MatchClear> {
        let rect = self.tracker.end()?;
        let preview = self.preview_of(rect);
        if !preview.is_valid() {
            return None;
        }
        let apples = self.board.clear_rect(rect);
        Some(MatchClear { rect, apples })
    }
}

#[cfg(test)]
mod tests {
    use crate::core::CellPos;

    use super::*;

    fn metrics() -> CellMetrics {
        // One input unit per cell keeps test coordinates readable
        CellMetrics::new(1.0, 1.0)
    }

    fn field(art: &str) -> GameField {
        GameField::with_board(Board::from_ascii(art), metrics())
    }

    #[test]
    fn test_preview_tracks_the_growing_rectangle() {
        let mut field = field(
            r"
            125.5............
            .2...............
            ",
        );

        field.begin_selection(Point::new(0.0, 0.0));
        let preview = field.selection_preview().unwrap();
        assert_eq!(preview.sum(), 1);
        assert_eq!(preview.apples(), 1);
        assert!(!preview.is_valid());

        field.update_selection(Point::new(1.0, 1.0));
        let preview = field.selection_preview().unwrap();
        assert_eq!(preview.sum(), 1 + 2 + 2);
        assert_eq!(preview.apples(), 3);
        assert!(!preview.is_valid());

        field.update_selection(Point::new(2.0, 1.0));
        let preview = field.selection_preview().unwrap();
        assert_eq!(preview.sum(), 1 + 2 + 5 + 2);
        assert_eq!(preview.apples(), 4);
        assert!(preview.is_valid());
    }

    #[test]
    fn test_valid_selection_clears_exactly_its_apples() {
        let mut field = field(
            r"
            1254.............
            .2...............
            33...............
            ",
        );

        field.begin_selection(Point::new(0.0, 0.0));
        field.update_selection(Point::new(2.0, 1.0));
        let clear = field.end_selection().expect("1+2+5+2 = 10 over two rows");

        assert_eq!(clear.apples(), 4);
        assert_eq!(
            clear.rect(),
            CellRect::from_corners(CellPos::new(0, 0), CellPos::new(1, 2))
        );

        // Everything inside the rectangle is gone
        for pos in clear.rect().cells() {
            assert!(field.board().cell(pos).unwrap().is_empty());
        }
        // Neighbors outside are untouched
        assert_eq!(field.board().cell(CellPos::new(0, 3)).unwrap().value(), Some(4));
        assert_eq!(field.board().cell(CellPos::new(2, 0)).unwrap().value(), Some(3));
        assert_eq!(field.board().cell(CellPos::new(2, 1)).unwrap().value(), Some(3));
    }

    #[test]
    fn test_invalid_selection_changes_nothing() {
        let mut field = field(
            r"
            99...............
            ",
        );
        let before = field.board().clone();

        field.begin_selection(Point::new(0.0, 0.0));
        field.update_selection(Point::new(1.0, 0.0));
        assert_eq!(field.end_selection(), None);

        assert_eq!(field.board(), &before);
        assert!(field.selection_preview().is_none());
    }

    #[test]
    fn test_all_empty_rectangle_never_matches() {
        let mut field = field(
            r"
            ...55............
            ",
        );

        field.begin_selection(Point::new(0.0, 0.0));
        field.update_selection(Point::new(2.0, 0.0));
        let preview = field.selection_preview().unwrap();
        assert_eq!(preview.sum(), 0);
        assert!(!preview.is_valid());
        assert_eq!(field.end_selection(), None);
    }

    #[test]
    fn test_end_without_begin_is_noop() {
        let mut field = field(
            r"
            55...............
            ",
        );
        assert_eq!(field.end_selection(), None);
    }

    #[test]
    fn test_empty_cells_inside_a_match_are_not_counted() {
        let mut field = field(
            r"
            5.5..............
            ",
        );

        field.begin_selection(Point::new(0.0, 0.0));
        field.update_selection(Point::new(2.0, 0.0));
        let clear = field.end_selection().expect("5+5 across a gap");
        assert_eq!(clear.apples(), 2);
    }
}
