//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use strictly_triples::Player;
use tracing::{debug, info, instrument};

/// Largest board the terminal UI will lay out.
pub const MAX_BOARD_SIZE: usize = 32;

/// Settings for a run of the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name used for X when none is entered.
    #[serde(default = "default_player_x_name")]
    player_x_name: String,

    /// Name used for O when none is entered.
    #[serde(default = "default_player_o_name")]
    player_o_name: String,

    /// Board size used when the menu is skipped or for replays.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Sizes offered on the board menu.
    #[serde(default = "default_board_sizes")]
    board_sizes: Vec<usize>,

    /// Pause between the filling move and the result screen.
    #[serde(default = "default_finish_delay_ms")]
    finish_delay_ms: u64,

    /// Log destination in terminal UI mode.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_player_x_name() -> String {
    "Player X".to_string()
}

fn default_player_o_name() -> String {
    "Player O".to_string()
}

fn default_board_size() -> usize {
    3
}

fn default_board_sizes() -> Vec<usize> {
    vec![3, 4, 5, 6, 7]
}

fn default_finish_delay_ms() -> u64 {
    1200
}

fn default_log_file() -> PathBuf {
    PathBuf::from("triples.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_x_name: default_player_x_name(),
            player_o_name: default_player_o_name(),
            board_size: default_board_size(),
            board_sizes: default_board_sizes(),
            finish_delay_ms: default_finish_delay_ms(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Checks the settings make a playable game.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_sizes.is_empty() {
            return Err(ConfigError::new("board_sizes must not be empty".to_string()));
        }
        if let Some(size) = self
            .board_sizes
            .iter()
            .chain(std::iter::once(&self.board_size))
            .find(|&&size| size > MAX_BOARD_SIZE)
        {
            return Err(ConfigError::new(format!(
                "Board size {} exceeds the maximum of {}",
                size, MAX_BOARD_SIZE
            )));
        }
        Ok(())
    }

    /// Applies command-line overrides on top of the loaded file.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        board_size: Option<usize>,
        player_x_name: Option<String>,
        player_o_name: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(size) = board_size {
            self.board_size = size;
        }
        if let Some(name) = player_x_name {
            self.player_x_name = name;
        }
        if let Some(name) = player_o_name {
            self.player_o_name = name;
        }
        self.validate()?;
        Ok(self)
    }

    /// Pause before showing the result screen.
    pub fn finish_delay(&self) -> Duration {
        Duration::from_millis(self.finish_delay_ms)
    }

    /// Configured fallback name for `player`.
    pub fn default_name(&self, player: Player) -> &str {
        match player {
            Player::X => &self.player_x_name,
            Player::O => &self.player_o_name,
        }
    }

    /// Trims `entered`, falling back to the configured name if blank.
    pub fn name_or_default(&self, player: Player, entered: &str) -> String {
        let trimmed = entered.trim();
        if trimmed.is_empty() {
            self.default_name(player).to_string()
        } else {
            trimmed.to_string()
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
