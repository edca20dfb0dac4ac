use super::{
    BOARD_HEIGHT, BOARD_WIDTH,
    rect::{CellPos, CellRect},
};

/// Continuous input-space coordinate.
///
/// Units are whatever the front end measures pointer positions in (pixels,
/// terminal cells); the matching [`CellMetrics`] converts them to grid cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn x(self) -> f64 {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> f64 {
        self.y
    }
}

/// Continuous extent of a single grid cell in input-space units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    cell_width: f64,
    cell_height: f64,
}

impl CellMetrics {
    /// # Panics
    ///
    /// Panics unless both extents are strictly positive.
    #[must_use]
    pub fn new(cell_width: f64, cell_height: f64) -> Self {
        assert!(
            cell_width > 0.0 && cell_height > 0.0,
            "cell extents must be positive, got {cell_width}×{cell_height}"
        );
        Self {
            cell_width,
            cell_height,
        }
    }

    /// Maps a continuous coordinate to the containing grid cell.
    ///
    /// The coordinate is divided by the cell extent, floored, then clamped
    /// to the grid, so positions outside the grid (including negative ones)
    /// map to the nearest edge cell rather than failing.
    #[must_use]
    pub fn cell_at(self, point: Point) -> CellPos {
        let col = clamp_axis(point.x / self.cell_width, BOARD_WIDTH);
        let row = clamp_axis(point.y / self.cell_height, BOARD_HEIGHT);
        CellPos::new(row, col)
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_axis(scaled: f64, len: usize) -> usize {
    if scaled.is_nan() || scaled < 0.0 {
        return 0;
    }
    // Truncation is floor for non-negative values
    (scaled as usize).min(len - 1)
}

/// Tracks the in-progress drag selection.
///
/// At most one selection is active at a time. The anchor is fixed by
/// [`Self::begin`]; [`Self::update`] moves only the cursor, so the rectangle
/// may grow and shrink freely while the pointer is held down.
#[derive(Debug, Clone)]
pub struct SelectionTracker {
    metrics: CellMetrics,
    active: Option<ActiveSelection>,
}

#[derive(Debug, Clone, Copy)]
struct ActiveSelection {
    anchor: CellPos,
    cursor: CellPos,
}

impl ActiveSelection {
    fn rect(self) -> CellRect {
        CellRect::from_corners(self.anchor, self.cursor)
    }
}

impl SelectionTracker {
    #[must_use]
    pub const fn new(metrics: CellMetrics) -> Self {
        Self {
            metrics,
            active: None,
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub const fn metrics(&self) -> CellMetrics {
        self.metrics
    }

    /// Starts a selection: both anchor and cursor land on the cell
    /// containing `point`.
    pub fn begin(&mut self, point: Point) {
        let cell = self.metrics.cell_at(point);
        self.active = Some(ActiveSelection {
            anchor: cell,
            cursor: cell,
        });
    }

    /// Moves the cursor to the cell containing `point`; the anchor stays.
    /// No-op while no selection is active.
    pub fn update(&mut self, point: Point) {
        if let Some(active) = &mut self.active {
            active.cursor = self.metrics.cell_at(point);
        }
    }

    /// Ends the selection, returning its final normalized rectangle, or
    /// `None` when no selection was active.
    pub fn end(&mut self) -> Option<CellRect> {
        self.active.take().map(ActiveSelection::rect)
    }

    /// Drops the active selection without resolving it.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Normalized bounds of the active selection, for live preview.
    #[must_use]
    pub fn current_rect(&self) -> Option<CellRect> {
        self.active.map(ActiveSelection::rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> SelectionTracker {
        SelectionTracker::new(CellMetrics::new(10.0, 20.0))
    }

    #[test]
    fn test_point_maps_by_floor() {
        let metrics = CellMetrics::new(10.0, 20.0);

        assert_eq!(metrics.cell_at(Point::new(0.0, 0.0)), CellPos::new(0, 0));
        assert_eq!(metrics.cell_at(Point::new(9.9, 19.9)), CellPos::new(0, 0));
        assert_eq!(metrics.cell_at(Point::new(10.0, 20.0)), CellPos::new(1, 1));
        assert_eq!(metrics.cell_at(Point::new(35.0, 45.0)), CellPos::new(2, 3));
    }

    #[test]
    fn test_point_beyond_edges_clamps_to_last_cell() {
        let metrics = CellMetrics::new(10.0, 20.0);

        let far = Point::new(10_000.0, 10_000.0);
        assert_eq!(
            metrics.cell_at(far),
            CellPos::new(BOARD_HEIGHT - 1, BOARD_WIDTH - 1)
        );
    }

    #[test]
    fn test_negative_point_clamps_to_first_cell() {
        let metrics = CellMetrics::new(10.0, 20.0);

        assert_eq!(metrics.cell_at(Point::new(-5.0, -0.1)), CellPos::new(0, 0));
    }

    #[test]
    fn test_begin_sets_anchor_and_cursor() {
        let mut tracker = tracker();
        tracker.begin(Point::new(25.0, 45.0));

        assert!(tracker.is_active());
        assert_eq!(
            tracker.current_rect(),
            Some(CellRect::single(CellPos::new(2, 2)))
        );
    }

    #[test]
    fn test_update_moves_only_the_cursor() {
        let mut tracker = tracker();
        tracker.begin(Point::new(45.0, 65.0));
        tracker.update(Point::new(5.0, 5.0));

        let rect = tracker.current_rect().unwrap();
        assert_eq!(rect.top(), 0);
        assert_eq!(rect.left(), 0);
        assert_eq!(rect.bottom(), 3);
        assert_eq!(rect.right(), 4);

        // Dragging back toward the anchor shrinks the rectangle
        tracker.update(Point::new(45.0, 65.0));
        assert_eq!(
            tracker.current_rect(),
            Some(CellRect::single(CellPos::new(3, 4)))
        );
    }

    #[test]
    fn test_update_without_begin_is_noop() {
        let mut tracker = tracker();
        tracker.update(Point::new(5.0, 5.0));

        assert!(!tracker.is_active());
        assert_eq!(tracker.current_rect(), None);
    }

    #[test]
    fn test_end_returns_rect_and_deactivates() {
        let mut tracker = tracker();
        tracker.begin(Point::new(5.0, 5.0));
        tracker.update(Point::new(25.0, 45.0));

        let rect = tracker.end().unwrap();
        assert_eq!(rect, CellRect::from_corners(CellPos::new(0, 0), CellPos::new(2, 2)));
        assert!(!tracker.is_active());
        assert_eq!(tracker.end(), None);
    }

    #[test]
    fn test_cancel_discards_selection() {
        let mut tracker = tracker();
        tracker.begin(Point::new(5.0, 5.0));
        tracker.cancel();

        assert!(!tracker.is_active());
        assert_eq!(tracker.end(), None);
    }
}
