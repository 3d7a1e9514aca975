//! Line-scoring engine for N×N three-in-a-row tic-tac-toe.
//!
//! Every three-in-a-row on the board scores a line for the player who
//! holds it, and play continues until the board is full. The player
//! with more lines wins.
//!
//! # Example
//!
//! ```
//! use strictly_triples::{Player, Session};
//!
//! let mut session = Session::new(3, "Ada", "Grace");
//! for index in [0, 3, 1, 4] {
//!     session.play(index);
//! }
//!
//! let result = session.play(2);
//! let scored = result.newly_scored_lines();
//! assert_eq!(scored.len(), 1);
//! assert_eq!(scored[0].line().cells(), [0, 1, 2]);
//! assert_eq!(scored[0].player(), Player::X);
//! assert!(session.outcome().is_none());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod evaluator;
mod invariants;
mod line;
mod outcome;
mod registry;
mod session;
mod tally;
mod types;

pub use board::Board;
pub use evaluator::{LineEvaluator, ScoredLine};
pub use invariants::{
    BoardShapeInvariant, Invariant, InvariantSet, InvariantViolation, ScoredLinesOwnedInvariant,
    SessionInvariants, TallyMatchesRegistryInvariant,
};
pub use line::{Direction, LINE_LENGTH, Line, generate_lines, line_count};
pub use outcome::Outcome;
pub use registry::ScoredRegistry;
pub use session::{MoveResult, Session, SessionStatus};
pub use tally::Tally;
pub use types::{Cell, MoveError, Player};

/// Starts a new game. Shorthand for [`Session::new`].
pub fn new_session(
    board_size: usize,
    player_x_name: impl Into<String>,
    player_o_name: impl Into<String>,
) -> Session {
    Session::new(board_size, player_x_name, player_o_name)
}
