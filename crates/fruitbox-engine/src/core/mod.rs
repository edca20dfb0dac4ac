pub use self::{board::*, rect::*, selection::*};

pub(crate) mod board;
pub(crate) mod rect;
pub(crate) mod selection;

/// Number of columns in the playing grid.
pub const BOARD_WIDTH: usize = 17;
/// Number of rows in the playing grid.
pub const BOARD_HEIGHT: usize = 10;
