//! Screen implementations for the lobby state machine.

mod board_select;
mod congrats;
mod in_game;
mod name_entry;

pub use board_select::BoardSelectScreen;
pub use congrats::CongratsScreen;
pub use in_game::InGameScreen;
pub use name_entry::NameEntryScreen;
