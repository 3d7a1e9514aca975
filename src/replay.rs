//! Headless play-through of a move list.

use crate::config::GameConfig;
use derive_getters::Getters;
use serde::Serialize;
use strictly_triples::{MoveResult, Outcome, Player, Session, Tally};
use tracing::{info, instrument};

/// One attempted move and what happened to it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct MoveRecord {
    /// Requested cell.
    index: usize,
    /// Player whose turn it was.
    player: Player,
    /// Result from the session.
    result: MoveResult,
}

/// Everything a replay produced.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct ReplaySummary {
    /// Rows (and columns) on the board.
    board_size: usize,
    /// Name playing X.
    player_x_name: String,
    /// Name playing O.
    player_o_name: String,
    /// Every attempted move in order.
    moves: Vec<MoveRecord>,
    /// Final board, one string per row.
    board: Vec<String>,
    /// Final line counts.
    tally: Tally,
    /// Outcome if the board filled.
    outcome: Option<Outcome>,
    /// End-of-game announcement if the board filled.
    message: Option<String>,
}

/// Plays `moves` on a fresh session built from `config`.
///
/// Rejected moves are recorded and skipped; they do not stop the replay.
#[instrument(skip(config), fields(board_size = config.board_size()))]
pub fn replay(config: &GameConfig, moves: &[usize]) -> ReplaySummary {
    let mut session = Session::new(
        *config.board_size(),
        config.player_x_name().clone(),
        config.player_o_name().clone(),
    );

    let records = moves
        .iter()
        .map(|&index| {
            let player = session.current_player();
            let result = session.play(index);
            MoveRecord {
                index,
                player,
                result,
            }
        })
        .collect();

    let summary = ReplaySummary {
        board_size: session.board_size(),
        player_x_name: session.player_name(Player::X).to_string(),
        player_o_name: session.player_name(Player::O).to_string(),
        moves: records,
        board: session.board().display().lines().map(str::to_string).collect(),
        tally: session.tally(),
        outcome: session.outcome(),
        message: session.outcome_message(),
    };
    info!(tally = %summary.tally, outcome = ?summary.outcome, "Replay finished");
    summary
}

impl ReplaySummary {
    /// Human-readable report.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for record in &self.moves {
            let name = match record.player {
                Player::X => &self.player_x_name,
                Player::O => &self.player_o_name,
            };
            match &record.result {
                MoveResult::Rejected(err) => {
                    out.push_str(&format!("{} ({}) -> {}: rejected, {}\n", name, record.player, record.index, err));
                }
                MoveResult::Accepted { newly_scored_lines, .. } => {
                    out.push_str(&format!("{} ({}) -> {}", name, record.player, record.index));
                    for scored in newly_scored_lines {
                        out.push_str(&format!("  +line {}", scored.line()));
                    }
                    out.push('\n');
                }
            }
        }
        out.push('\n');
        for row in &self.board {
            out.push_str(row);
            out.push('\n');
        }
        out.push_str(&format!(
            "\n{}: {}  |  {}: {}\n",
            self.player_x_name,
            self.tally.x(),
            self.player_o_name,
            self.tally.o()
        ));
        match &self.message {
            Some(message) => out.push_str(message),
            None => out.push_str("Game still in progress"),
        }
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(size: usize) -> GameConfig {
        GameConfig::default()
            .with_overrides(Some(size), Some("Ada".to_string()), Some("Grace".to_string()))
            .unwrap()
    }

    #[test]
    fn test_replay_in_progress() {
        let summary = replay(&config(3), &[0, 3, 1, 4, 2]);
        assert_eq!(summary.tally().x(), 1);
        assert_eq!(summary.outcome(), &None);
        assert_eq!(summary.board(), &vec!["X X X", "O O .", ". . ."]);
        assert!(summary.render_text().contains("+line (0, 1, 2) horizontal"));
        assert!(summary.render_text().ends_with("Game still in progress\n"));
    }

    #[test]
    fn test_replay_records_rejections() {
        let summary = replay(&config(3), &[4, 4, 9]);
        let errors: Vec<_> = summary.moves().iter().map(|m| m.result().error()).collect();
        assert_eq!(errors[0], None);
        assert!(errors[1].is_some());
        assert!(errors[2].is_some());
        // O never got to play.
        assert!(summary.moves()[1..].iter().all(|m| *m.player() == Player::O));
    }

    #[test]
    fn test_replay_full_game() {
        let summary = replay(&config(3), &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(summary.outcome(), &Some(Outcome::Draw { x: 0, o: 0 }));
        assert_eq!(summary.message().as_deref(), Some("🤝 It's a Draw! (0 - 0)"));
    }

    #[test]
    fn test_summary_json() {
        let summary = replay(&config(3), &[0]);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["board_size"], 3);
        assert_eq!(json["player_x_name"], "Ada");
        assert_eq!(json["moves"][0]["player"], "X");
        assert!(json["outcome"].is_null());
    }
}
