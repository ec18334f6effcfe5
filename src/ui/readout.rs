//! Calculator readout layout.
//!
//! Lays out the history line above the display line, both right-aligned
//! like a pocket calculator, plus a status line for messages.

use zcalc::calculator::DisplaySnapshot;

/// Key help shown under the readout.
pub const HELP_LINE: &str =
    "0-9 . digits  + - * / ops  = Enter  % percent  Bksp delete  Esc clear  y copy  q quit";

/// Lines of the readout, top to bottom.
pub fn readout_lines(snapshot: &DisplaySnapshot, width: usize) -> [String; 2] {
    [
        right_align(&snapshot.history, width),
        right_align(&snapshot.display, width),
    ]
}

fn right_align(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        // Keep the least significant end visible.
        return text.chars().skip(len - width).collect();
    }

    format!("{}{}", " ".repeat(width - len), text)
}
