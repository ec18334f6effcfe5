//! Key scripts: a compact way to replay key presses, e.g. `"5+3*2="`.
//!
//! Each non-whitespace character is one key. Named keys go in brackets:
//! `"12[bs]3[enter]"`.

use lazy_static::lazy_static;
use regex::Regex;

use super::{InputError, parse_key, parse_key_char};
use crate::calculator::Command;

lazy_static! {
    /// A bracketed key name or any single non-whitespace character.
    static ref SCRIPT_TOKEN: Regex = Regex::new(r"\[([^\[\]\s]*)\]|(\S)").unwrap();
}

/// Parse a key script into commands.
pub fn parse_script(script: &str) -> Result<Vec<Command>, InputError> {
    let mut commands = Vec::new();

    for caps in SCRIPT_TOKEN.captures_iter(script) {
        if let Some(name) = caps.get(1) {
            let name = name.as_str();
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(InputError::UnknownKey(name.to_string()));
            }
            commands.push(parse_key(name)?);
            continue;
        }

        let token = &caps[2];
        if token == "[" {
            let start = caps.get(0).map_or(0, |m| m.start());
            return Err(InputError::UnterminatedKeyName(start));
        }

        let command = token
            .chars()
            .next()
            .and_then(parse_key_char)
            .ok_or_else(|| InputError::UnknownKey(token.to_string()))?;
        commands.push(command);
    }

    Ok(commands)
}
