//! Screen trait and transition type for the lobby state machine.

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::GameConfig;

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] and [`Screen::tick`]
/// to drive the [`LobbyController`](crate::LobbyController).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Back to name entry (the main menu).
    GoToNameEntry,
    /// Names are settled; pick a board size next.
    GoToBoardSelect {
        /// Name playing X.
        player_x_name: String,
        /// Name playing O.
        player_o_name: String,
    },
    /// Start a game on the given board.
    StartGame {
        /// Rows (and columns).
        board_size: usize,
    },
    /// The game is decided; show the result.
    ShowResult,
    /// Restart the finished game with the same names and size.
    PlayAgain,
    /// Exit the application.
    Quit,
}

/// Trait implemented by each screen in the lobby state machine.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, config: &GameConfig);

    /// Handles a key press and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, config: &GameConfig) -> ScreenTransition;

    /// Called once per loop iteration for time-based transitions.
    fn tick(&mut self) -> ScreenTransition {
        ScreenTransition::Stay
    }
}
