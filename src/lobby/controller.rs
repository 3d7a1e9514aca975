//! Lobby controller: the state machine driving the multi-screen TUI.

use crossterm::event::{self, Event, KeyEventKind};
use derive_getters::Getters;
use ratatui::{Terminal, backend::Backend};
use strictly_triples::Session;
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument};

use crate::GameConfig;
use crate::lobby::screen::{Screen, ScreenTransition};
use crate::lobby::screens::{BoardSelectScreen, CongratsScreen, InGameScreen, NameEntryScreen};

/// Active screen in the lobby state machine.
#[derive(Debug)]
enum ActiveScreen {
    NameEntry(NameEntryScreen),
    BoardSelect(BoardSelectScreen),
    InGame(InGameScreen),
    Congrats(CongratsScreen),
}

impl ActiveScreen {
    fn screen(&self) -> &dyn Screen {
        match self {
            ActiveScreen::NameEntry(s) => s,
            ActiveScreen::BoardSelect(s) => s,
            ActiveScreen::InGame(s) => s,
            ActiveScreen::Congrats(s) => s,
        }
    }

    fn screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::NameEntry(s) => s,
            ActiveScreen::BoardSelect(s) => s,
            ActiveScreen::InGame(s) => s,
            ActiveScreen::Congrats(s) => s,
        }
    }
}

/// Controller that drives the lobby state machine.
///
/// Call [`LobbyController::run`] to start the event loop.
#[derive(Debug, Getters)]
pub struct LobbyController {
    config: GameConfig,
    player_x_name: String,
    player_o_name: String,
    fixed_board_size: Option<usize>,
}

impl LobbyController {
    /// Creates a new lobby controller.
    ///
    /// With `fixed_board_size` set the board menu is skipped.
    #[instrument(skip(config))]
    pub fn new(config: GameConfig, fixed_board_size: Option<usize>) -> Self {
        info!("Creating LobbyController");
        Self {
            player_x_name: config.player_x_name().clone(),
            player_o_name: config.player_o_name().clone(),
            config,
            fixed_board_size,
        }
    }

    /// Runs the lobby event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting lobby event loop");

        let mut screen = ActiveScreen::NameEntry(NameEntryScreen::new());

        loop {
            terminal.draw(|f| screen.screen().render(f, &self.config))?;

            let mut transition = screen.screen_mut().tick();

            // Poll for input with short timeout to keep the loop responsive.
            if transition == ScreenTransition::Stay
                && event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                transition = screen.screen_mut().handle_key(key, &self.config);
            }

            screen = match self.apply_transition(transition, screen) {
                Some(next) => next,
                None => {
                    info!("Lobby quitting");
                    return Ok(());
                }
            };

            sleep(Duration::from_millis(10)).await;
        }
    }

    /// Applies a screen transition, returning the next screen or `None` to quit.
    #[instrument(skip(self, current))]
    fn apply_transition(
        &mut self,
        transition: ScreenTransition,
        current: ActiveScreen,
    ) -> Option<ActiveScreen> {
        if transition != ScreenTransition::Stay {
            debug!(transition = ?transition, "Applying screen transition");
        }
        match transition {
            ScreenTransition::Stay => Some(current),

            ScreenTransition::GoToNameEntry => {
                info!("Navigating to NameEntry");
                Some(ActiveScreen::NameEntry(NameEntryScreen::with_names(
                    self.player_x_name.clone(),
                    self.player_o_name.clone(),
                )))
            }

            ScreenTransition::GoToBoardSelect {
                player_x_name,
                player_o_name,
            } => {
                self.player_x_name = player_x_name;
                self.player_o_name = player_o_name;
                match self.fixed_board_size {
                    Some(board_size) => Some(self.start_game(board_size)),
                    None => {
                        info!("Navigating to BoardSelect");
                        Some(ActiveScreen::BoardSelect(BoardSelectScreen::new(
                            &self.config,
                            &self.player_x_name,
                            &self.player_o_name,
                        )))
                    }
                }
            }

            ScreenTransition::StartGame { board_size } => Some(self.start_game(board_size)),

            ScreenTransition::ShowResult => match current {
                ActiveScreen::InGame(game) => {
                    info!("Navigating to Congrats");
                    Some(ActiveScreen::Congrats(CongratsScreen::new(game.into_session())))
                }
                other => Some(other),
            },

            ScreenTransition::PlayAgain => match current {
                ActiveScreen::Congrats(congrats) => {
                    info!("Starting rematch");
                    let mut session = congrats.into_session();
                    session.restart();
                    Some(ActiveScreen::InGame(InGameScreen::new(
                        session,
                        self.config.finish_delay(),
                    )))
                }
                other => Some(other),
            },

            ScreenTransition::Quit => None,
        }
    }

    fn start_game(&self, board_size: usize) -> ActiveScreen {
        info!(board_size, "Starting game");
        let session = Session::new(board_size, self.player_x_name.clone(), self.player_o_name.clone());
        ActiveScreen::InGame(InGameScreen::new(session, self.config.finish_delay()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> ScreenTransition {
        ScreenTransition::GoToBoardSelect {
            player_x_name: "Ada".to_string(),
            player_o_name: "Grace".to_string(),
        }
    }

    fn in_game(screen: &ActiveScreen) -> &InGameScreen {
        match screen {
            ActiveScreen::InGame(game) => game,
            other => panic!("expected InGame, got {:?}", other),
        }
    }

    #[test]
    fn test_names_then_board_menu() {
        let mut controller = LobbyController::new(GameConfig::default(), None);
        let screen = ActiveScreen::NameEntry(NameEntryScreen::new());

        let screen = controller.apply_transition(names(), screen).unwrap();
        assert!(matches!(screen, ActiveScreen::BoardSelect(_)));
        assert_eq!(controller.player_x_name(), "Ada");

        let screen = controller
            .apply_transition(ScreenTransition::StartGame { board_size: 4 }, screen)
            .unwrap();
        let game = in_game(&screen);
        assert_eq!(game.session().board_size(), 4);
        assert_eq!(game.session().player_name(strictly_triples::Player::O), "Grace");
    }

    #[test]
    fn test_fixed_size_skips_board_menu() {
        let mut controller = LobbyController::new(GameConfig::default(), Some(6));
        let screen = ActiveScreen::NameEntry(NameEntryScreen::new());

        let screen = controller.apply_transition(names(), screen).unwrap();
        assert_eq!(in_game(&screen).session().board_size(), 6);
    }

    #[test]
    fn test_result_then_rematch() {
        let mut controller = LobbyController::new(GameConfig::default(), None);
        let mut session = Session::new(1, "Ada", "Grace");
        session.play(0);
        let screen = ActiveScreen::InGame(InGameScreen::new(session, Duration::ZERO));

        let screen = controller
            .apply_transition(ScreenTransition::ShowResult, screen)
            .unwrap();
        match &screen {
            ActiveScreen::Congrats(congrats) => {
                assert_eq!(congrats.message(), "🤝 It's a Draw! (0 - 0)")
            }
            other => panic!("expected Congrats, got {:?}", other),
        }

        let screen = controller
            .apply_transition(ScreenTransition::PlayAgain, screen)
            .unwrap();
        let game = in_game(&screen);
        assert!(game.session().is_active());
        assert_eq!(game.session().player_name(strictly_triples::Player::X), "Ada");
    }

    #[test]
    fn test_back_to_menu_keeps_names() {
        let mut controller = LobbyController::new(GameConfig::default(), None);
        let screen = ActiveScreen::NameEntry(NameEntryScreen::new());
        let screen = controller.apply_transition(names(), screen).unwrap();

        let screen = controller
            .apply_transition(ScreenTransition::GoToNameEntry, screen)
            .unwrap();
        match screen {
            ActiveScreen::NameEntry(entry) => assert_eq!(entry.player_o_input(), "Grace"),
            other => panic!("expected NameEntry, got {:?}", other),
        }
    }

    #[test]
    fn test_quit() {
        let mut controller = LobbyController::new(GameConfig::default(), None);
        let screen = ActiveScreen::NameEntry(NameEntryScreen::new());
        assert!(controller.apply_transition(ScreenTransition::Quit, screen).is_none());
    }
}
