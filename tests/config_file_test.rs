//! Tests for loading configuration files from disk.

use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;
use triples::GameConfig;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write config");
    file
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        r#"
player_x_name = "Ada"
player_o_name = "Grace"
board_size = 5
board_sizes = [3, 5, 8]
finish_delay_ms = 0
log_file = "game.log"
"#,
    );

    let config = GameConfig::from_file(file.path()).expect("Valid config");

    assert_eq!(config.player_x_name(), "Ada");
    assert_eq!(config.player_o_name(), "Grace");
    assert_eq!(*config.board_size(), 5);
    assert_eq!(config.board_sizes(), &vec![3, 5, 8]);
    assert_eq!(config.finish_delay(), Duration::ZERO);
    assert_eq!(config.log_file().to_str(), Some("game.log"));
}

#[test]
fn test_load_empty_file_gives_defaults() {
    let file = write_config("");
    let config = GameConfig::load(Some(file.path())).expect("Valid config");
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let err = GameConfig::load(Some(dir.path().join("missing.toml").as_path())).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_invalid_file_is_error() {
    let file = write_config("board_sizes = [3, 64]\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("64"));
}
