//! Key mapping from terminal events to key records.

use crate::types::{keys, BuiltinEvent, KeyPress};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Name a terminal key the way a browser names `KeyboardEvent.code`/`key`.
///
/// Vim-style `h`/`j`/`k`/`l` double as arrows.
pub fn key_press(code: KeyCode) -> Option<KeyPress> {
    let press = match code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
            KeyPress::named(keys::ARROW_LEFT)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
            KeyPress::named(keys::ARROW_RIGHT)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => KeyPress::named(keys::ARROW_UP),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            KeyPress::named(keys::ARROW_DOWN)
        }

        KeyCode::Char(' ') => KeyPress::new(keys::SPACE, " "),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
            KeyPress::new(format!("Key{}", c.to_ascii_uppercase()), c.to_string())
        }
        KeyCode::Char(c) if c.is_ascii_digit() => KeyPress::new(format!("Digit{c}"), c.to_string()),

        KeyCode::Enter => KeyPress::named("Enter"),
        KeyCode::Esc => KeyPress::named("Escape"),
        KeyCode::Tab => KeyPress::named("Tab"),
        KeyCode::Backspace => KeyPress::named("Backspace"),

        _ => return None,
    };
    Some(press)
}

/// Map a full terminal key event, honoring press/release.
///
/// Terminals that never report releases only ever produce key-down events;
/// auto-repeat counts as another key-down.
pub fn key_event(key: KeyEvent) -> Option<BuiltinEvent> {
    let press = key_press(key.code)?;
    match key.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => Some(BuiltinEvent::KeyDown(press)),
        KeyEventKind::Release => Some(BuiltinEvent::KeyUp(press)),
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
