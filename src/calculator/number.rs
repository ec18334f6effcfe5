//! Operand parsing and rendering.
//!
//! Operands are kept as text while the user types them. These helpers turn
//! that text into numbers for arithmetic and turn computed values back into
//! operand text.

use lazy_static::lazy_static;
use regex::Regex;

use super::engine::MAX_ROUNDING_DIGITS;

lazy_static! {
    /// Longest numeric prefix: optional sign, then `Infinity` or a decimal
    /// literal with an optional complete exponent.
    static ref NUMERIC_PREFIX: Regex = Regex::new(
        r"^[+-]?(?:Infinity|(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)"
    ).unwrap();
}

/// Parse the numeric prefix of an operand.
///
/// Leading whitespace is skipped and trailing garbage ignored, so `"5."` is
/// 5 and `"12abc"` is 12. Returns `None` when no numeric prefix exists
/// (`""`, `"."`, `"-"`, `"NaN"`).
pub fn parse_operand(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let prefix = NUMERIC_PREFIX.find(trimmed)?.as_str();

    prefix.parse::<f64>().ok().filter(|value| !value.is_nan())
}

/// Render a computed value as operand text.
pub fn render_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        // Covers negative zero.
        "0".to_string()
    } else {
        format!("{}", value)
    }
}

/// Round to `digits` fractional digits, halves toward positive infinity.
///
/// `digits` is capped at [`MAX_ROUNDING_DIGITS`]. Values too large to scale
/// are returned unchanged.
pub fn round_to_digits(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let factor = 10f64.powi(digits.min(MAX_ROUNDING_DIGITS) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }

    // `scaled + 0.5` can itself round to the next even integer near 2^52,
    // so compare the fractional part instead.
    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    rounded / factor
}
