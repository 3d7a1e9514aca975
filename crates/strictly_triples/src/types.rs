//! Core domain types: players, cells, and move errors.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell marked by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Returns true if nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Reason a move was rejected.
///
/// All variants are caller-input errors. A rejected move leaves the
/// board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, Serialize, Deserialize)]
pub enum MoveError {
    /// The index does not name a cell on this board.
    #[display("Cell {index} is out of bounds for a board of {cells} cells")]
    OutOfBounds {
        /// Requested cell index.
        index: usize,
        /// Number of cells on the board.
        cells: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell {index} is already occupied")]
    CellOccupied {
        /// Requested cell index.
        index: usize,
    },

    /// The board is full and the game is over.
    #[display("Game is already over")]
    GameInactive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_cell_player() {
        assert_eq!(Cell::Empty.player(), None);
        assert_eq!(Cell::Occupied(Player::O).player(), Some(Player::O));
        assert!(Cell::default().is_empty());
    }

    #[test]
    fn test_move_error_messages() {
        let err = MoveError::OutOfBounds { index: 9, cells: 9 };
        assert_eq!(err.to_string(), "Cell 9 is out of bounds for a board of 9 cells");
        assert_eq!(
            MoveError::CellOccupied { index: 4 }.to_string(),
            "Cell 4 is already occupied"
        );
        assert_eq!(MoveError::GameInactive.to_string(), "Game is already over");
    }
}
