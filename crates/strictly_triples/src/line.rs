//! Three-in-a-row line templates.
//!
//! Lines are generated once per board size. Each one is an ordered
//! triple of row-major cell indices plus the direction it runs in.
//! Generation order is fixed (horizontal, vertical, then both
//! diagonals) so that evaluation output is deterministic.

use super::board::Board;
use super::types::Player;
use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Cells in a scoring line.
pub const LINE_LENGTH: usize = 3;

/// Direction a line runs in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Direction {
    /// Left to right along a row.
    #[display("horizontal")]
    Horizontal,
    /// Top to bottom along a column.
    #[display("vertical")]
    Vertical,
    /// Down and to the right (↘).
    #[display("diagonal down-right")]
    DiagonalDownRight,
    /// Down and to the left (↙).
    #[display("diagonal down-left")]
    DiagonalDownLeft,
}

impl Direction {
    /// All lines running in this direction on a `size × size` board.
    fn lines(self, size: usize) -> Vec<Line> {
        if size < LINE_LENGTH {
            return Vec::new();
        }
        let span = size - LINE_LENGTH;
        let at = |row: usize, col: usize| row * size + col;

        match self {
            Direction::Horizontal => (0..size)
                .flat_map(|r| (0..=span).map(move |c| [at(r, c), at(r, c + 1), at(r, c + 2)]))
                .map(|cells| Line::new(cells, self))
                .collect(),
            Direction::Vertical => (0..size)
                .flat_map(|c| (0..=span).map(move |r| [at(r, c), at(r + 1, c), at(r + 2, c)]))
                .map(|cells| Line::new(cells, self))
                .collect(),
            Direction::DiagonalDownRight => (0..=span)
                .flat_map(|r| {
                    (0..=span).map(move |c| [at(r, c), at(r + 1, c + 1), at(r + 2, c + 2)])
                })
                .map(|cells| Line::new(cells, self))
                .collect(),
            Direction::DiagonalDownLeft => (0..=span)
                .flat_map(|r| {
                    (2..size).map(move |c| [at(r, c), at(r + 1, c - 1), at(r + 2, c - 2)])
                })
                .map(|cells| Line::new(cells, self))
                .collect(),
        }
    }
}

/// One three-in-a-row template on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new)]
pub struct Line {
    cells: [usize; LINE_LENGTH],
    direction: Direction,
}

impl Line {
    /// Cell indices in order.
    pub fn cells(&self) -> [usize; LINE_LENGTH] {
        self.cells
    }

    /// Direction this line runs in.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// First and last cell, for drawing the line across the board.
    pub fn endpoints(&self) -> (usize, usize) {
        (self.cells[0], self.cells[LINE_LENGTH - 1])
    }

    /// Row and column of both endpoints on a `size × size` board.
    ///
    /// `None` if the line does not fit on a board of that size.
    pub fn endpoint_coordinates(&self, size: usize) -> Option<((usize, usize), (usize, usize))> {
        let (start, end) = self.endpoints();
        let cells = size * size;
        (start < cells && end < cells).then(|| ((start / size, start % size), (end / size, end % size)))
    }

    /// True if the line passes through `index`.
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }

    /// The player holding all three cells, if any.
    pub fn owner(&self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.cells;
        let first = board.get(a)?.player()?;
        let same = |index| board.get(index).and_then(|cell| cell.player()) == Some(first);
        (same(b) && same(c)).then_some(first)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.cells;
        write!(f, "({}, {}, {}) {}", a, b, c, self.direction)
    }
}

/// Generates every line on a `size × size` board.
///
/// Boards smaller than 3 have no lines.
#[instrument]
pub fn generate_lines(size: usize) -> Vec<Line> {
    Direction::iter().flat_map(|direction| direction.lines(size)).collect()
}

/// Number of lines [`generate_lines`] yields for `size`.
pub fn line_count(size: usize) -> usize {
    if size < LINE_LENGTH {
        return 0;
    }
    let span = size - (LINE_LENGTH - 1);
    2 * size * span + 2 * span * span
}
