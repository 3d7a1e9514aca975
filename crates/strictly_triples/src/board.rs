//! N×N board storage and move validation.

use super::types::{Cell, MoveError, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Square board of `size × size` cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with `size` rows and columns.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true for a zero-sized board.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Gets the cell at the given index.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Indices of cells nobody has played yet.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Places `player`'s mark at `index`.
    ///
    /// Fails without touching the board if the board is already full,
    /// the index is off the board, or the cell is taken.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<(), MoveError> {
        if self.is_full() {
            return Err(MoveError::GameInactive);
        }

        let cells = self.cells.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(MoveError::OutOfBounds { index, cells })?;

        if !cell.is_empty() {
            return Err(MoveError::CellOccupied { index });
        }

        *cell = Cell::Occupied(player);
        debug!(index, %player, "Mark placed");
        Ok(())
    }

    /// Row and column of a cell index, or `None` if it is off the board.
    pub fn coordinates(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.cells.len()).then(|| (index / self.size, index % self.size))
    }

    /// Formats the board as rows of `X`, `O` and `.` for empty cells.
    pub fn display(&self) -> String {
        self.cells
            .chunks(self.size.max(1))
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Empty => ".".to_string(),
                        Cell::Occupied(player) => player.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
