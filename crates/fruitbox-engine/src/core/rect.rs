use super::{BOARD_HEIGHT, BOARD_WIDTH};

/// Grid coordinate in `(row, col)` form, zero-based, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPos {
    row: usize,
    col: usize,
}

impl CellPos {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Whether this coordinate addresses a cell of the 17×10 grid.
    #[must_use]
    pub const fn is_in_bounds(self) -> bool {
        self.row < BOARD_HEIGHT && self.col < BOARD_WIDTH
    }
}

/// Inclusive rectangle of grid cells, stored normalized.
///
/// A drag may move the cursor to any side of the anchor, so
/// [`Self::from_corners`] accepts the two corners in any orientation and
/// normalizes to top-left/bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    top: usize,
    left: usize,
    bottom: usize,
    right: usize,
}

impl CellRect {
    #[must_use]
    pub fn from_corners(a: CellPos, b: CellPos) -> Self {
        Self {
            top: a.row.min(b.row),
            left: a.col.min(b.col),
            bottom: a.row.max(b.row),
            right: a.col.max(b.col),
        }
    }

    /// Rectangle covering exactly one cell.
    #[must_use]
    pub fn single(pos: CellPos) -> Self {
        Self::from_corners(pos, pos)
    }

    #[must_use]
    pub const fn top(self) -> usize {
        self.top
    }

    #[must_use]
    pub const fn left(self) -> usize {
        self.left
    }

    #[must_use]
    pub const fn bottom(self) -> usize {
        self.bottom
    }

    #[must_use]
    pub const fn right(self) -> usize {
        self.right
    }

    /// Number of grid rows the rectangle spans.
    #[must_use]
    pub const fn rows(self) -> usize {
        self.bottom - self.top + 1
    }

    /// Number of grid columns the rectangle spans.
    #[must_use]
    pub const fn cols(self) -> usize {
        self.right - self.left + 1
    }

    #[must_use]
    pub const fn contains(self, pos: CellPos) -> bool {
        pos.row >= self.top && pos.row <= self.bottom && pos.col >= self.left && pos.col <= self.right
    }

    /// Iterates the contained positions in row-major order.
    pub fn cells(self) -> impl Iterator<Item = CellPos> {
        (self.top..=self.bottom)
            .flat_map(move |row| (self.left..=self.right).map(move |col| CellPos::new(row, col)))
    }
}
