//! Name entry screen: the main menu where both players type their names.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use strictly_triples::Player;
use tracing::{debug, info, instrument};

use crate::GameConfig;
use crate::lobby::screen::{Screen, ScreenTransition};

/// Longest name accepted from the keyboard.
const MAX_NAME_LEN: usize = 24;

/// State for the name entry screen.
#[derive(Debug, Getters)]
pub struct NameEntryScreen {
    player_x_input: String,
    player_o_input: String,
    focus: Player,
}

impl NameEntryScreen {
    /// Creates the screen with both fields blank.
    #[instrument]
    pub fn new() -> Self {
        Self::with_names(String::new(), String::new())
    }

    /// Creates the screen with names from a previous game filled in.
    #[instrument]
    pub fn with_names(player_x_input: String, player_o_input: String) -> Self {
        debug!("Initializing NameEntryScreen");
        Self {
            player_x_input,
            player_o_input,
            focus: Player::X,
        }
    }

    fn focused_input(&mut self) -> &mut String {
        match self.focus {
            Player::X => &mut self.player_x_input,
            Player::O => &mut self.player_o_input,
        }
    }

    fn field<'a>(&self, label: &'a str, value: &'a str, player: Player, config: &GameConfig) -> Paragraph<'a> {
        let focused = self.focus == player;
        let (text, style) = if value.is_empty() {
            (
                config.default_name(player).to_string(),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            (value.to_string(), Style::default().fg(Color::White))
        };
        let border = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Paragraph::new(text)
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(border).title(label))
    }
}

impl Default for NameEntryScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for NameEntryScreen {
    #[instrument(skip(self, frame, config))]
    fn render(&self, frame: &mut Frame, config: &GameConfig) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title = Paragraph::new("Triples — Enter Player Names")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        frame.render_widget(self.field("Player X", &self.player_x_input, Player::X, config), chunks[1]);
        frame.render_widget(self.field("Player O", &self.player_o_input, Player::O, config), chunks[2]);

        let help = Paragraph::new("Type a name | Tab: Switch field | Enter: Next | Esc: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[4]);
    }

    #[instrument(skip(self, key, config))]
    fn handle_key(&mut self, key: KeyEvent, config: &GameConfig) -> ScreenTransition {
        match key.code {
            KeyCode::Esc => ScreenTransition::Quit,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.opponent();
                ScreenTransition::Stay
            }
            KeyCode::Backspace => {
                self.focused_input().pop();
                ScreenTransition::Stay
            }
            KeyCode::Char(c) => {
                let input = self.focused_input();
                if input.chars().count() < MAX_NAME_LEN {
                    input.push(c);
                }
                ScreenTransition::Stay
            }
            KeyCode::Enter if self.focus == Player::X => {
                self.focus = Player::O;
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let player_x_name = config.name_or_default(Player::X, &self.player_x_input);
                let player_o_name = config.name_or_default(Player::O, &self.player_o_input);
                info!(%player_x_name, %player_o_name, "Names entered");
                ScreenTransition::GoToBoardSelect {
                    player_x_name,
                    player_o_name,
                }
            }
            _ => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(screen: &mut NameEntryScreen, code: KeyCode) -> ScreenTransition {
        screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE), &GameConfig::default())
    }

    fn type_text(screen: &mut NameEntryScreen, text: &str) {
        for c in text.chars() {
            press(screen, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_enter_names() {
        let mut screen = NameEntryScreen::new();
        type_text(&mut screen, "Ada");
        assert_eq!(press(&mut screen, KeyCode::Enter), ScreenTransition::Stay);
        type_text(&mut screen, "Grace");

        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            ScreenTransition::GoToBoardSelect {
                player_x_name: "Ada".to_string(),
                player_o_name: "Grace".to_string(),
            }
        );
    }

    #[test]
    fn test_blank_names_use_defaults() {
        let mut screen = NameEntryScreen::new();
        press(&mut screen, KeyCode::Tab);
        type_text(&mut screen, "  ");
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            ScreenTransition::GoToBoardSelect {
                player_x_name: "Player X".to_string(),
                player_o_name: "Player O".to_string(),
            }
        );
    }

    #[test]
    fn test_backspace_and_length_limit() {
        let mut screen = NameEntryScreen::new();
        type_text(&mut screen, &"q".repeat(40));
        assert_eq!(screen.player_x_input().len(), MAX_NAME_LEN);
        press(&mut screen, KeyCode::Backspace);
        assert_eq!(screen.player_x_input().len(), MAX_NAME_LEN - 1);
    }

    #[test]
    fn test_escape_quits() {
        let mut screen = NameEntryScreen::new();
        assert_eq!(press(&mut screen, KeyCode::Esc), ScreenTransition::Quit);
    }
}
