//! Display formatting for the calculator readout.
//!
//! Turns engine state into the two lines a front end shows: the main
//! display (current operand with thousand separators) and the history line
//! (previous operand plus the pending operation symbol).

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use super::engine::EngineState;
use super::number::{parse_operand, render_number};

lazy_static! {
    /// An integer part typed digit by digit, with an optional sign.
    static ref PLAIN_INTEGER: Regex = Regex::new(r"^(-?)(\d+)$").unwrap();
}

/// Formatting options for the readout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Inserted between groups of three integer digits.
    pub group_separator: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            group_separator: ",".to_string(),
        }
    }
}

/// What a front end should show after a command.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DisplaySnapshot {
    /// The current operand, formatted.
    pub display: String,
    /// `"{previous} {symbol}"` while an operation is pending, else empty.
    pub history: String,
}

/// Render the readout for an engine state.
pub fn render(state: &EngineState, options: &DisplayOptions) -> DisplaySnapshot {
    let display = format_display_number(state.current_operand(), options);
    let history = match state.operation() {
        Some(op) => format!(
            "{} {}",
            format_display_number(state.previous_operand(), options),
            op.symbol()
        ),
        None => String::new(),
    };

    DisplaySnapshot { display, history }
}

/// Format operand text for display.
///
/// The integer part gets thousand separators. A fractional part, even an
/// empty one after a trailing `.`, is reattached verbatim so in-progress
/// entry like `"1,234."` survives.
pub fn format_display_number(text: &str, options: &DisplayOptions) -> String {
    if text == "NaN" {
        return text.to_string();
    }

    let (integer_part, fraction_part) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text, None),
    };

    let integer_display = format_integer_part(integer_part, &options.group_separator);

    match fraction_part {
        Some(fraction) => format!("{}.{}", integer_display, fraction),
        None => integer_display,
    }
}

/// Format the integer part, or return an empty string if it does not parse.
fn format_integer_part(integer_part: &str, separator: &str) -> String {
    // Typed digits are grouped as-is so long entries keep every digit.
    if let Some(caps) = PLAIN_INTEGER.captures(integer_part) {
        let sign = &caps[1];
        let digits = caps[2].trim_start_matches('0');
        let digits = if digits.is_empty() { "0" } else { digits };
        return format!("{}{}", sign, group_digits(digits, separator));
    }

    match parse_operand(integer_part) {
        None => String::new(),
        Some(value) if value.is_infinite() => render_number(value),
        Some(value) => {
            let rounded = format!("{:.0}", value.round());
            match rounded.strip_prefix('-') {
                Some(digits) => format!("-{}", group_digits(digits, separator)),
                None => group_digits(&rounded, separator),
            }
        }
    }
}

/// Insert `separator` between groups of three digits, counting from the right.
fn group_digits(digits: &str, separator: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    let len = digits.len();

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push_str(separator);
        }
        result.push(c);
    }

    result
}
