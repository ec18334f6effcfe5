//! Input dispatch: maps keys to calculator commands.
//!
//! Keys arrive either as names (from a key script on the command line) or
//! as terminal key events in interactive mode. Both end up as
//! [`Command`](crate::calculator::Command) values for the engine.

mod script;
mod terminal;

pub use script::parse_script;
pub use terminal::{KeyAction, key_action};

use thiserror::Error;

use crate::calculator::{Command, Operation};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown key: {0:?}")]
    UnknownKey(String),
    #[error("unterminated key name starting at byte {0}")]
    UnterminatedKeyName(usize),
}

/// Map a key name or single key character to a command.
///
/// Digits and `.` append; `+ - * / × ÷` choose an operation; `=` or
/// `Enter` computes; `Backspace`/`Delete` remove a digit; `Escape` or `C`
/// clears; `%` applies the immediate percent shortcut.
pub fn parse_key(key: &str) -> Result<Command, InputError> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return parse_key_char(c).ok_or_else(|| InputError::UnknownKey(key.to_string()));
    }

    match key.to_ascii_lowercase().as_str() {
        "enter" | "return" => Ok(Command::Compute),
        "backspace" | "bs" | "delete" | "del" => Ok(Command::DeleteLastDigit),
        "escape" | "esc" | "clear" => Ok(Command::Clear),
        "percent" => Ok(Command::PercentImmediate),
        _ => Err(InputError::UnknownKey(key.to_string())),
    }
}

/// Map a single typed character to a command.
pub(crate) fn parse_key_char(c: char) -> Option<Command> {
    match c {
        '0'..='9' | '.' => Some(Command::AppendDigit(c)),
        '=' => Some(Command::Compute),
        '%' => Some(Command::PercentImmediate),
        'c' | 'C' => Some(Command::Clear),
        '+' | '-' | '*' | '/' | '×' | '÷' => {
            let mut buf = [0u8; 4];
            c.encode_utf8(&mut buf)
                .parse::<Operation>()
                .ok()
                .map(Command::ChooseOperation)
        }
        _ => None,
    }
}
