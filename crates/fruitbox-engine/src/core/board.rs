use std::{array, fmt::Write as _, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::OutOfBoundsError;

use super::{
    BOARD_HEIGHT, BOARD_WIDTH,
    rect::{CellPos, CellRect},
};

/// A single cell of the grid: empty, or an apple bearing a digit in `1..=9`.
///
/// Cells are created as apples and only ever transition to `Empty` through a
/// successful match; there is no refill for the life of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Apple(u8),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The apple's digit, or `None` for an empty cell.
    #[must_use]
    pub const fn value(self) -> Option<u8> {
        match self {
            Cell::Empty => None,
            Cell::Apple(value) => Some(value),
        }
    }
}

/// Seed for deterministic board generation.
///
/// A 128-bit (16-byte) seed for the RNG that fills the grid. The same seed
/// always produces the same board, enabling:
///
/// - Reproducible runs for debugging (`--seed` on the CLI)
/// - Deterministic testing
///
/// Serializes as a 32-character lowercase hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSeed([u8; 16]);

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("invalid board seed: expected 32 hex characters")]
pub struct ParseBoardSeedError;

impl FromStr for BoardSeed {
    type Err = ParseBoardSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseBoardSeedError);
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| ParseBoardSeedError)?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for BoardSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let num = u128::from_be_bytes(self.0);
        let mut hex_str = String::with_capacity(2 * self.0.len());
        write!(&mut hex_str, "{num:032x}").unwrap();
        serializer.serialize_str(&hex_str)
    }
}

impl<'de> Deserialize<'de> for BoardSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid board seed: {hex_str}")))
    }
}

/// Allows generating random `BoardSeed` values with `rng.random()`.
impl Distribution<BoardSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BoardSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        BoardSeed(seed)
    }
}

/// The 17×10 playing grid.
///
/// Every cell starts as an apple with a uniformly random digit in `1..=9`.
/// Apples only ever leave the board through [`Board::clear`] /
/// [`Board::clear_rect`]; there is no gravity and no refill, so a board only
/// empties out over a session.
///
/// Rectangle queries ([`Board::sum`], [`Board::apple_count`],
/// [`Board::clear_rect`]) expect rectangles built from in-bounds corners, as
/// produced by the selection tracker's clamped mapping.
///
/// # Example
///
/// ```
/// use fruitbox_engine::{Board, CellPos};
///
/// let board = Board::new();
/// let cell = board.cell(CellPos::new(0, 0)).unwrap();
/// assert!((1..=9).contains(&cell.value().unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub const WIDTH: usize = BOARD_WIDTH;
    pub const HEIGHT: usize = BOARD_HEIGHT;

    /// Creates a board filled from a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but deterministic: the same seed always produces
    /// the same grid.
    #[must_use]
    pub fn with_seed(seed: BoardSeed) -> Self {
        let mut rng = Pcg32::from_seed(seed.0);
        let cells = array::from_fn(|_| array::from_fn(|_| Cell::Apple(rng.random_range(1..=9))));
        Self { cells }
    }

    /// Returns the cell at `pos`, or `OutOfBoundsError` outside the grid.
    pub fn cell(&self, pos: CellPos) -> Result<Cell, OutOfBoundsError> {
        if !pos.is_in_bounds() {
            return Err(OutOfBoundsError);
        }
        Ok(self.cells[pos.row()][pos.col()])
    }

    /// Empties the cell at `pos`. Clearing an already-empty cell is a no-op.
    pub fn clear(&mut self, pos: CellPos) -> Result<(), OutOfBoundsError> {
        if !pos.is_in_bounds() {
            return Err(OutOfBoundsError);
        }
        self.cells[pos.row()][pos.col()] = Cell::Empty;
        Ok(())
    }

    /// Iterates the rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_WIDTH]> {
        self.cells.iter()
    }

    /// Sum of the apple digits inside `rect`; empty cells contribute nothing.
    #[must_use]
    pub fn sum(&self, rect: CellRect) -> u32 {
        rect.cells()
            .filter_map(|pos| self.cells[pos.row()][pos.col()].value())
            .map(u32::from)
            .sum()
    }

    /// Number of apples inside `rect`.
    #[must_use]
    pub fn apple_count(&self, rect: CellRect) -> usize {
        rect.cells()
            .filter(|pos| !self.cells[pos.row()][pos.col()].is_empty())
            .count()
    }

    /// Empties every apple inside `rect`, returning how many were cleared.
    ///
    /// Cells outside `rect` are untouched.
    pub fn clear_rect(&mut self, rect: CellRect) -> usize {
        let mut cleared = 0;
        for pos in rect.cells() {
            let cell = &mut self.cells[pos.row()][pos.col()];
            if !cell.is_empty() {
                *cell = Cell::Empty;
                cleared += 1;
            }
        }
        cleared
    }

    /// Apples left anywhere on the board.
    #[must_use]
    pub fn remaining_apples(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Creates a `Board` from ASCII art for testing.
    ///
    /// `1`–`9` are apples, `.` is an empty cell. Up to 10 rows of exactly 17
    /// cells each; unspecified trailing rows stay empty.
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let mut cells = [[Cell::Empty; BOARD_WIDTH]; BOARD_HEIGHT];
        let lines: Vec<&str> = art.lines().filter(|line| !line.trim().is_empty()).collect();
        assert!(
            lines.len() <= BOARD_HEIGHT,
            "at most {BOARD_HEIGHT} rows, got {}",
            lines.len()
        );

        for (row, line) in lines.iter().enumerate() {
            let chars: Vec<char> = line
                .chars()
                .filter(|c| *c == '.' || c.is_ascii_digit())
                .collect();
            assert_eq!(
                chars.len(),
                BOARD_WIDTH,
                "each row must have exactly {BOARD_WIDTH} cells, got {} at row {row}",
                chars.len(),
            );

            for (col, &ch) in chars.iter().enumerate() {
                cells[row][col] = match ch {
                    '.' => Cell::Empty,
                    '1'..='9' => Cell::Apple(ch as u8 - b'0'),
                    _ => panic!("invalid cell {ch:?} at row {row}, col {col}"),
                };
            }
        }
        Self { cells }
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Format: 10 comma-separated rows of 17 characters, '.' for empty
        let mut text = String::with_capacity(BOARD_HEIGHT * (BOARD_WIDTH + 1));
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                text.push(',');
            }
            for cell in row {
                match cell.value() {
                    Some(value) => text.push((b'0' + value) as char),
                    None => text.push('.'),
                }
            }
        }
        serializer.serialize_str(&text)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != BOARD_HEIGHT {
            return Err(serde::de::Error::custom(format!(
                "expected {BOARD_HEIGHT} comma-separated rows, got {}",
                parts.len()
            )));
        }

        let mut cells = [[Cell::Empty; BOARD_WIDTH]; BOARD_HEIGHT];
        for (row, part) in parts.iter().enumerate() {
            let chars: Vec<char> = part.chars().collect();
            if chars.len() != BOARD_WIDTH {
                return Err(serde::de::Error::custom(format!(
                    "expected {BOARD_WIDTH} cells at row {row}, got {}",
                    chars.len()
                )));
            }
            for (col, &ch) in chars.iter().enumerate() {
                cells[row][col] = match ch {
                    '.' => Cell::Empty,
                    '1'..='9' => Cell::Apple(ch as u8 - b'0'),
                    _ => {
                        return Err(serde::de::Error::custom(format!(
                            "invalid cell {ch:?} at row {row}, col {col}"
                        )));
                    }
                };
            }
        }

        Ok(Board { cells })
    }
}
