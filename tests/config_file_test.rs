//! Tests for loading game config files.

use inverted_core::InvalidMovePolicy;
use inverted_games::{GameConfig, PlayerKind};
use inverted_tictactoe::Mark;
use std::io::Write;

#[test]
fn test_load_full_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[player_x]
name = "Alice"
kind = "ai"

[player_o]
name = "Bob"
kind = "human"

[rules]
invalid_move = "reprompt"
max_attempts = 5
"#
    )
    .unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();

    assert_eq!(config.kind(Mark::X), PlayerKind::Ai);
    assert_eq!(config.display_name(Mark::X), "Alice");
    assert_eq!(config.kind(Mark::O), PlayerKind::Human);
    assert_eq!(
        config.rules().policy(),
        InvalidMovePolicy::Reprompt { max_attempts: 5 }
    );
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[rules\nmax_attempts = ").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();

    assert!(err.message.starts_with("Failed to parse config"));
}
