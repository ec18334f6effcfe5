use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::parse_key_char;
use crate::calculator::Command;

/// What the interactive front end should do with a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Command(Command),
    /// Copy the current result to the clipboard.
    Copy,
    Quit,
}

/// Map a terminal key event to an action. Returns `None` for keys with no binding.
pub fn key_action(key: KeyEvent) -> Option<KeyAction> {
    // Only handle key press events (not release) - important for Windows
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => Some(KeyAction::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(KeyAction::Quit),
        KeyCode::Char('y') => Some(KeyAction::Copy),
        KeyCode::Char(c) => parse_key_char(c).map(KeyAction::Command),
        KeyCode::Enter => Some(KeyAction::Command(Command::Compute)),
        KeyCode::Backspace | KeyCode::Delete => {
            Some(KeyAction::Command(Command::DeleteLastDigit))
        }
        KeyCode::Esc => Some(KeyAction::Command(Command::Clear)),
        _ => None,
    }
}
