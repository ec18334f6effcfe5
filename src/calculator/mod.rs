//! Calculator module for the one-pending-operation keypad calculator.
//!
//! This module provides functionality to:
//! - Track operand entry and a single pending operation
//! - Format the current operand and history line for display
//! - Copy results to the clipboard

mod clipboard;
mod display;
mod engine;
mod number;
mod operation;

pub use clipboard::{ClipboardError, clipboard_text, copy_to_clipboard};
pub use display::{DisplayOptions, DisplaySnapshot, format_display_number, render};
pub use engine::{
    CalculatorEngine, Command, DEFAULT_ROUNDING_DIGITS, EngineOptions, EngineState,
    MAX_ROUNDING_DIGITS,
};
pub use number::{parse_operand, render_number, round_to_digits};
pub use operation::{Operation, UnknownOperation};
