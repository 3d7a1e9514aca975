//! Board size selection screen.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strictly_triples::line_count;
use tracing::{debug, info, instrument};

use crate::GameConfig;
use crate::lobby::screen::{Screen, ScreenTransition};

/// State for the board size menu.
#[derive(Debug, Getters)]
pub struct BoardSelectScreen {
    sizes: Vec<usize>,
    list_state: ListState,
    heading: String,
}

impl BoardSelectScreen {
    /// Creates the menu with the sizes from `config`.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig, player_x_name: &str, player_o_name: &str) -> Self {
        let sizes = config.board_sizes().clone();
        debug!(?sizes, "Initializing BoardSelectScreen");
        let mut list_state = ListState::default();
        let preferred = sizes.iter().position(|s| s == config.board_size()).unwrap_or(0);
        list_state.select(Some(preferred));
        Self {
            sizes,
            list_state,
            heading: format!("{} (X) vs {} (O)", player_x_name, player_o_name),
        }
    }

    fn select_previous(&mut self) {
        let count = self.sizes.len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count.saturating_sub(1),
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let count = self.sizes.len().max(1);
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Currently highlighted board size.
    pub fn selected_size(&self) -> Option<usize> {
        self.list_state
            .selected()
            .and_then(|i| self.sizes.get(i))
            .copied()
    }
}

impl Screen for BoardSelectScreen {
    #[instrument(skip(self, frame, _config))]
    fn render(&self, frame: &mut Frame, _config: &GameConfig) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title = Paragraph::new(self.heading.as_str())
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = self
            .sizes
            .iter()
            .map(|&size| ListItem::new(format!("{size} × {size}   ({} lines)", line_count(size))))
            .collect();
        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Board Size"))
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");
        let mut list_state = self.list_state;
        frame.render_stateful_widget(menu, chunks[1], &mut list_state);

        let help = Paragraph::new("↑↓: Navigate | Enter: Start | Esc: Back | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key, _config))]
    fn handle_key(&mut self, key: KeyEvent, _config: &GameConfig) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => match self.selected_size() {
                Some(board_size) => {
                    info!(board_size, "Board size selected");
                    ScreenTransition::StartGame { board_size }
                }
                None => ScreenTransition::Stay,
            },
            KeyCode::Esc | KeyCode::Backspace => ScreenTransition::GoToNameEntry,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
