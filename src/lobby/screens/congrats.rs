//! Result screen shown once the board is full.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use strictly_triples::{Outcome, Session, SessionStatus};
use tracing::{info, instrument};

use crate::GameConfig;
use crate::lobby::board_view::{player_color, render_board};
use crate::lobby::screen::{Screen, ScreenTransition};

/// Result screen holding the finished session.
#[derive(Debug)]
pub struct CongratsScreen {
    session: Session,
    outcome: Option<Outcome>,
    message: String,
}

impl CongratsScreen {
    /// Creates the screen for a decided session.
    #[instrument(skip(session))]
    pub fn new(session: Session) -> Self {
        let outcome = match session.status() {
            SessionStatus::Finished(outcome) => Some(outcome),
            SessionStatus::Active => None,
        };
        let message = session
            .outcome_message()
            .unwrap_or_else(|| "Game over".to_string());
        info!(%message, "Showing result");
        Self {
            session,
            outcome,
            message,
        }
    }

    /// Banner colour: the winner's colour, yellow for a draw.
    fn banner_style(&self) -> Style {
        let color = match self.outcome {
            Some(outcome) if outcome.is_draw() => Color::Yellow,
            Some(outcome) => outcome.winner().map_or(Color::Green, player_color),
            None => Color::Green,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// The announcement shown.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Hands the session back for a rematch.
    pub fn into_session(self) -> Session {
        self.session
    }
}

impl Screen for CongratsScreen {
    #[instrument(skip(self, frame, _config))]
    fn render(&self, frame: &mut Frame, _config: &GameConfig) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let banner = Paragraph::new(self.message.as_str())
            .style(self.banner_style())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Game Over"));
        frame.render_widget(banner, chunks[0]);

        render_board(frame, chunks[1], &self.session, None);

        let help = Paragraph::new("Enter/r: Play again | m/Esc: Menu | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key, _config))]
    fn handle_key(&mut self, key: KeyEvent, _config: &GameConfig) -> ScreenTransition {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => ScreenTransition::PlayAgain,
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => ScreenTransition::GoToNameEntry,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use strictly_triples::Player;

    fn finished() -> Session {
        let mut session = Session::new(3, "Ada", "Grace");
        for index in [1, 4, 2, 5, 3, 7, 6, 8, 0] {
            session.play(index);
        }
        session
    }

    #[test]
    fn test_message_from_outcome() {
        let screen = CongratsScreen::new(finished());
        assert_eq!(screen.message(), "Ada Wins with 2 line(s)! 🎉");
    }

    #[test]
    fn test_keys() {
        let mut screen = CongratsScreen::new(finished());
        let config = GameConfig::default();
        let press = |screen: &mut CongratsScreen, code| {
            screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE), &config)
        };
        assert_eq!(press(&mut screen, KeyCode::Enter), ScreenTransition::PlayAgain);
        assert_eq!(press(&mut screen, KeyCode::Char('m')), ScreenTransition::GoToNameEntry);
        assert_eq!(press(&mut screen, KeyCode::Char('q')), ScreenTransition::Quit);
        assert_eq!(press(&mut screen, KeyCode::Left), ScreenTransition::Stay);
    }

    #[test]
    fn test_banner_colour_follows_outcome() {
        let win = CongratsScreen::new(finished());
        assert_eq!(win.banner_style().fg, Some(player_color(Player::X)));

        let mut session = Session::new(1, "Ada", "Grace");
        session.play(0);
        let draw = CongratsScreen::new(session);
        assert_eq!(draw.banner_style().fg, Some(Color::Yellow));
    }
}
