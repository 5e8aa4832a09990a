//! Scripted sessions through the terminal shell.

use perfect_tictactoe::{Cell, ControllerState, Position, Shell, ShellConfig};
use std::io::{Cursor, Write};

fn instant() -> ShellConfig {
    ShellConfig::default().with_delay_ms(0)
}

fn run_session(config: ShellConfig, input: &str, json: bool) -> (String, ControllerState, Cell) {
    let mut output = Vec::new();
    let mut shell = Shell::new(Cursor::new(input.as_bytes()), &mut output, config).with_json(json);
    shell.run().expect("session runs");
    let state = shell.game().state();
    let center = shell.game().board().get(Position::Center);
    drop(shell);
    (String::from_utf8(output).expect("utf8 output"), state, center)
}

#[test]
fn test_session_greets_and_replies() {
    let (out, state, center) = run_session(instant(), "0 0\nq\n", false);
    assert!(out.contains("You are X. AI is O."));
    assert!(out.contains("AI plays 1 1"));
    assert_eq!(center, Cell::Computer);
    assert_eq!(state, ControllerState::AwaitingHumanMove);
}

#[test]
fn test_invalid_moves_are_reported() {
    let (out, _, _) = run_session(instant(), "1 1\n1 1\n5 5\nhello\n", false);
    assert!(out.contains("Invalid move: Square Center (1, 1) is already occupied"));
    assert!(out.contains("Invalid move: Coordinates (5, 5) are off the board"));
    assert!(out.contains("Unrecognized input 'hello'"));
}

#[test]
fn test_game_to_completion_then_reset() {
    // Row-major human moves, skipping cells that are taken.
    let mut script = String::new();
    for row in 0..3 {
        for col in 0..3 {
            script.push_str(&format!("{} {}\n", row, col));
        }
    }
    script.push_str("y\n");

    let (out, state, center) = run_session(instant(), &script, false);
    assert!(out.contains("Play again? [y/n]"));
    assert!(!out.contains("You win!"));
    assert!(out.contains("AI wins!") || out.contains("It's a draw."));
    assert_eq!(state, ControllerState::AwaitingHumanMove);
    assert_eq!(center, Cell::Empty);
}

#[test]
fn test_custom_symbols_and_json() {
    let config = ShellConfig::from_toml("computer_delay_ms = 0\nhuman_symbol = \"H\"\ncomputer_symbol = \"C\"")
        .expect("valid config");
    let (out, _, _) = run_session(config, "0 0\n", true);
    assert!(out.contains(" H |"));
    assert!(out.contains(" C |"));
    assert!(out.contains(r#"[["Human","Empty","Empty"],["Empty","Computer","Empty"],["Empty","Empty","Empty"]]"#));
}

#[test]
fn test_config_file_roundtrip() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "computer_delay_ms = 250").unwrap();
    writeln!(file, "computer_symbol = \"@\"").unwrap();

    let config = ShellConfig::from_file(file.path()).expect("config loads");
    assert_eq!(*config.computer_delay_ms(), 250);
    assert_eq!(*config.human_symbol(), 'X');
    assert_eq!(*config.computer_symbol(), '@');
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = ShellConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}
