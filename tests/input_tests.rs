//! Key mapping drives the core the same way the binary does

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use matrix_tetris::core::GameState;
use matrix_tetris::input::{handle_key_event, should_quit};
use matrix_tetris::types::GameAction;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_key_sequence_moves_piece() {
    let mut state = GameState::new(12345);
    let start = state.position();

    for code in [KeyCode::Left, KeyCode::Char('a')] {
        if let Some(action) = handle_key_event(press(code)) {
            state.apply_action(action);
        }
    }
    assert_eq!(state.position().x, start.x - 2);

    let action = handle_key_event(press(KeyCode::Down));
    assert_eq!(action, Some(GameAction::SoftDrop));
    state.apply_action(GameAction::SoftDrop);
    assert_eq!(state.position().y, start.y + 1);
}

#[test]
fn test_space_hard_drops() {
    let mut state = GameState::new(12345);
    let action = handle_key_event(press(KeyCode::Char(' '))).unwrap();
    assert!(state.apply_action(action));
    assert!(state.arena().occupied().count() >= 4);
}

#[test]
fn test_release_is_ignored_and_repeat_counts() {
    let release = KeyEvent {
        code: KeyCode::Left,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert_eq!(handle_key_event(release), None);

    let repeat = KeyEvent {
        kind: KeyEventKind::Repeat,
        ..release
    };
    assert_eq!(handle_key_event(repeat), Some(GameAction::MoveLeft));
}

#[test]
fn test_quit_keys_do_not_map_to_actions() {
    let esc = press(KeyCode::Esc);
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(should_quit(esc));
    assert!(should_quit(ctrl_c));
    assert_eq!(handle_key_event(esc), None);
    assert_eq!(handle_key_event(ctrl_c), None);

    // q rotates, it does not quit
    assert!(!should_quit(press(KeyCode::Char('q'))));
    assert_eq!(handle_key_event(press(KeyCode::Char('q'))), Some(GameAction::RotateCcw));
}
