//! One game from first move to full board.

use super::board::Board;
use super::evaluator::{LineEvaluator, ScoredLine};
use super::invariants::assert_invariants;
use super::line::Line;
use super::outcome::Outcome;
use super::registry::ScoredRegistry;
use super::tally::Tally;
use super::types::{MoveError, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Whether a session still accepts moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Moves are being accepted.
    Active,
    /// The board is full and the outcome is fixed.
    Finished(Outcome),
}

/// Result of [`Session::play`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    /// The move was refused; nothing changed.
    Rejected(MoveError),
    /// The mark was placed.
    Accepted {
        /// Lines this move completed, in evaluation order.
        newly_scored_lines: Vec<ScoredLine>,
        /// True if this move filled the board.
        board_full: bool,
    },
}

impl MoveResult {
    /// True if the move was placed.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveResult::Accepted { .. })
    }

    /// Lines completed by the move; empty when rejected.
    pub fn newly_scored_lines(&self) -> &[ScoredLine] {
        match self {
            MoveResult::Accepted { newly_scored_lines, .. } => newly_scored_lines,
            MoveResult::Rejected(_) => &[],
        }
    }

    /// The rejection reason, if any.
    pub fn error(&self) -> Option<MoveError> {
        match self {
            MoveResult::Rejected(err) => Some(*err),
            MoveResult::Accepted { .. } => None,
        }
    }
}

/// A single game: board, scored lines, tallies and whose turn it is.
///
/// X always moves first. Every call to [`Session::play`] runs the full
/// place → evaluate → tally → full-check cycle before returning.
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) player_x_name: String,
    pub(crate) player_o_name: String,
    pub(crate) board: Board,
    pub(crate) evaluator: LineEvaluator,
    pub(crate) registry: ScoredRegistry,
    pub(crate) tally: Tally,
    pub(crate) current: Player,
    pub(crate) status: SessionStatus,
}

impl Session {
    /// Starts a game on a `board_size × board_size` board.
    ///
    /// Sizes below 3 are allowed; such boards simply have no lines.
    #[instrument(skip(player_x_name, player_o_name))]
    pub fn new(
        board_size: usize,
        player_x_name: impl Into<String>,
        player_o_name: impl Into<String>,
    ) -> Self {
        let player_x_name = player_x_name.into();
        let player_o_name = player_o_name.into();
        info!(
            board_size,
            player_x = %player_x_name,
            player_o = %player_o_name,
            "Creating new session"
        );

        let board = Board::new(board_size);
        let tally = Tally::new();
        let status = Self::initial_status(&board, &tally);
        Self {
            player_x_name,
            player_o_name,
            board,
            evaluator: LineEvaluator::new(board_size),
            registry: ScoredRegistry::new(),
            tally,
            current: Player::X,
            status,
        }
    }

    fn initial_status(board: &Board, tally: &Tally) -> SessionStatus {
        if board.is_full() {
            SessionStatus::Finished(Outcome::decide(tally))
        } else {
            SessionStatus::Active
        }
    }

    /// Plays the current player's mark at `index`.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn play(&mut self, index: usize) -> MoveResult {
        let player = self.current;
        if let Err(err) = self.board.apply_move(index, player) {
            warn!(index, error = %err, "Move rejected");
            return MoveResult::Rejected(err);
        }

        let newly_scored_lines = self.evaluator.find_new_lines(&self.board, &mut self.registry);
        for scored in &newly_scored_lines {
            self.tally.record(scored.player());
        }
        if !newly_scored_lines.is_empty() {
            debug!(scored = newly_scored_lines.len(), tally = %self.tally, "Tally updated");
        }

        let board_full = self.board.is_full();
        if board_full {
            let outcome = Outcome::decide(&self.tally);
            info!(%outcome, "Board full, game decided");
            self.status = SessionStatus::Finished(outcome);
        } else {
            self.current = player.opponent();
        }

        assert_invariants(self);

        MoveResult::Accepted {
            newly_scored_lines,
            board_full,
        }
    }

    /// The decided outcome, once the board is full.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            SessionStatus::Active => None,
            SessionStatus::Finished(outcome) => Some(outcome),
        }
    }

    /// Clears the board, scored lines and tallies, keeping names and size.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(board_size = self.board.size(), "Restarting session");
        self.board = Board::new(self.board.size());
        self.registry = ScoredRegistry::new();
        self.tally = Tally::new();
        self.current = Player::X;
        self.status = Self::initial_status(&self.board, &self.tally);
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Rows (and columns) on the board.
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// Line templates for this board.
    pub fn evaluator(&self) -> &LineEvaluator {
        &self.evaluator
    }

    /// Lines scored so far.
    pub fn scored_lines(&self) -> &ScoredRegistry {
        &self.registry
    }

    /// Scored lines passing through `index`, in template order.
    pub fn scored_lines_through(&self, index: usize) -> impl Iterator<Item = &Line> {
        self.evaluator
            .lines_through(index)
            .filter(|line| self.registry.contains(line))
    }

    /// Current line counts.
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Player whose turn it is. After the final move this stays on
    /// the player who filled the board.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Returns the status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// True while moves are accepted.
    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    /// Display name for `player`.
    pub fn player_name(&self, player: Player) -> &str {
        match player {
            Player::X => &self.player_x_name,
            Player::O => &self.player_o_name,
        }
    }

    /// End-of-game announcement, once decided.
    pub fn outcome_message(&self) -> Option<String> {
        self.outcome()
            .map(|outcome| outcome.message(&self.player_x_name, &self.player_o_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_alternate() {
        let mut session = Session::new(3, "Ada", "Grace");
        assert_eq!(session.current_player(), Player::X);
        assert!(session.play(0).is_accepted());
        assert_eq!(session.current_player(), Player::O);
        assert!(session.play(1).is_accepted());
        assert_eq!(session.current_player(), Player::X);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut session = Session::new(3, "Ada", "Grace");
        session.play(4);
        let result = session.play(4);
        assert_eq!(result, MoveResult::Rejected(MoveError::CellOccupied { index: 4 }));
        assert_eq!(session.current_player(), Player::O);
        assert!(result.newly_scored_lines().is_empty());
    }

    #[test]
    fn test_restart_keeps_names_and_size() {
        let mut session = Session::new(4, "Ada", "Grace");
        for index in [0, 4, 1, 5, 2] {
            session.play(index);
        }
        assert_eq!(session.tally().x(), 1);

        session.restart();

        assert_eq!(session.board(), &Board::new(4));
        assert!(session.scored_lines().is_empty());
        assert_eq!(session.tally(), Tally::new());
        assert_eq!(session.current_player(), Player::X);
        assert_eq!(session.player_name(Player::O), "Grace");
        assert!(session.is_active());
    }

    #[test]
    fn test_zero_sized_board_is_decided_at_creation() {
        let mut session = Session::new(0, "Ada", "Grace");
        assert_eq!(session.outcome(), Some(Outcome::Draw { x: 0, o: 0 }));
        assert_eq!(session.play(0), MoveResult::Rejected(MoveError::GameInactive));
    }

    #[test]
    fn test_one_by_one_board_fills_on_first_move() {
        let mut session = Session::new(1, "Ada", "Grace");
        assert!(session.outcome().is_none());
        assert_eq!(
            session.play(0),
            MoveResult::Accepted {
                newly_scored_lines: Vec::new(),
                board_full: true
            }
        );
        assert_eq!(session.outcome(), Some(Outcome::Draw { x: 0, o: 0 }));
        assert_eq!(session.outcome_message().as_deref(), Some("🤝 It's a Draw! (0 - 0)"));
    }

    #[test]
    fn test_scored_lines_through_cell() {
        let mut session = Session::new(4, "Ada", "Grace");
        // X takes 0, 1, 2 and 3, scoring both overlapping rows.
        for index in [0, 4, 1, 5, 2, 8, 3] {
            session.play(index);
        }
        let through = |index| -> Vec<[usize; 3]> {
            session.scored_lines_through(index).map(|line| line.cells()).collect()
        };
        assert_eq!(through(0), vec![[0, 1, 2]]);
        assert_eq!(through(1), vec![[0, 1, 2], [1, 2, 3]]);
        assert_eq!(through(3), vec![[1, 2, 3]]);
        // O owns 4 and 5 but no line runs through them.
        assert!(through(4).is_empty());
        assert!(through(15).is_empty());
    }
}
