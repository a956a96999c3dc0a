//! Configuration files driving full replays.

use std::io::Write;
use strictly_games::{GameConfig, parse_moves, replay};
use strictly_tictactoe::{DiagonalRule, GamePhase, Player};
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Temp file");
    file.write_all(contents.as_bytes()).expect("Write config");
    file
}

#[test]
fn test_load_config_from_file() {
    let file = config_file(
        r#"
        player_one = "Alice"
        player_two = "Bob"
        max_bound = 3
        diagonal_rule = "legacy"
        "#,
    );

    let config = GameConfig::from_file(file.path()).expect("Valid config");
    assert_eq!(config.player_one(), "Alice");
    assert_eq!(config.player_two(), "Bob");
    assert_eq!(*config.max_bound(), 3);
    assert_eq!(*config.diagonal_rule(), DiagonalRule::Legacy);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_missing_file_is_an_error_for_from_file() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_a_parse_error() {
    let file = config_file("max_bound = \"three\"");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_replay_with_configured_players() {
    let file = config_file(
        r#"
        player_one = "Alice"
        player_two = "Bob"
        "#,
    );
    let config = GameConfig::load_or_default(file.path()).unwrap();
    let moves = parse_moves("0,0 1,0 0,1 1,2 2,2 1,1").unwrap();

    let report = replay(&config, &moves).unwrap();
    assert_eq!(report.status, GamePhase::Won);
    assert_eq!(report.winner, Some(Player::new("Bob")));
    assert!(report.rejected.is_empty());
}

#[test]
fn test_legacy_rule_changes_replay_outcome() {
    let moves = parse_moves("0,0 0,1 1,1 0,2 2,0").unwrap();

    let corrected = replay(&GameConfig::default(), &moves).unwrap();
    assert_eq!(corrected.status, GamePhase::InProgress);

    let file = config_file(r#"diagonal_rule = "legacy""#);
    let legacy = GameConfig::from_file(file.path()).unwrap();
    let report = replay(&legacy, &moves).unwrap();
    assert_eq!(report.status, GamePhase::Won);
    assert_eq!(report.winner, Some(Player::x()));
}

#[test]
fn test_replay_on_larger_board() {
    let file = config_file("max_bound = 3");
    let config = GameConfig::from_file(file.path()).unwrap();
    let moves = parse_moves("0,0 1,0 0,1 1,1 0,2 1,2 0,3").unwrap();

    let report = replay(&config, &moves).unwrap();
    assert_eq!(report.snapshot.side_len(), 4);
    assert_eq!(report.winner, Some(Player::x()));
}
