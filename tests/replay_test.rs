//! Tests for headless replays.

use triples::{GameConfig, MoveError, MoveResult, Outcome, Player, replay};

fn config(size: usize) -> GameConfig {
    GameConfig::default()
        .with_overrides(Some(size), Some("Ada".to_string()), Some("Grace".to_string()))
        .expect("Valid overrides")
}

#[test]
fn test_replay_full_four_by_four() {
    let moves = [9, 14, 15, 2, 12, 11, 7, 1, 8, 4, 0, 3, 6, 10, 5, 13];
    let summary = replay(&config(4), &moves);

    let scored: Vec<_> = summary
        .moves()
        .iter()
        .flat_map(|m| m.result().newly_scored_lines().to_vec())
        .map(|s| (s.line().cells(), s.player()))
        .collect();
    assert_eq!(
        scored,
        vec![
            ([1, 2, 3], Player::O),
            ([6, 9, 12], Player::X),
            ([5, 6, 7], Player::X),
        ]
    );
    assert_eq!(summary.outcome(), &Some(Outcome::Win { player: Player::X, lines: 2 }));
    assert_eq!(summary.message().as_deref(), Some("Ada Wins with 2 line(s)! 🎉"));
    assert!(summary.render_text().contains("Ada: 2  |  Grace: 1"));
}

#[test]
fn test_replay_after_game_over() {
    let summary = replay(&config(1), &[0, 0]);
    assert_eq!(
        summary.moves()[1].result(),
        &MoveResult::Rejected(MoveError::GameInactive)
    );
    assert_eq!(summary.outcome(), &Some(Outcome::Draw { x: 0, o: 0 }));
}

#[test]
fn test_replay_degenerate_board() {
    let summary = replay(&config(2), &[0, 1, 2, 3]);
    assert_eq!(summary.tally().total(), 0);
    assert_eq!(summary.board(), &vec!["X O", "X O"]);
    assert_eq!(summary.message().as_deref(), Some("🤝 It's a Draw! (0 - 0)"));
}
