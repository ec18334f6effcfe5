//! Clipboard functionality for copying calculator results.

use arboard::Clipboard;
use thiserror::Error;

use super::engine::EngineState;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to access clipboard: {0}")]
    Access(#[source] arboard::Error),
    #[error("failed to copy to clipboard: {0}")]
    Copy(#[source] arboard::Error),
}

/// Text placed on the clipboard for a state: the raw current operand,
/// without thousand separators.
pub fn clipboard_text(state: &EngineState) -> &str {
    state.current_operand()
}

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(ClipboardError::Access)?;

    clipboard
        .set_text(text.to_string())
        .map_err(ClipboardError::Copy)?;
    tracing::debug!("copied {:?} to clipboard", text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{CalculatorEngine, Operation};

    #[test]
    fn test_clipboard_text_is_unformatted() {
        let mut engine = CalculatorEngine::new();
        for c in "1234.5".chars() {
            engine.append_digit(c);
        }
        assert_eq!(engine.snapshot().display, "1,234.5");
        assert_eq!(clipboard_text(engine.state()), "1234.5");
    }

    #[test]
    fn test_clipboard_text_after_compute() {
        let mut engine = CalculatorEngine::new();
        engine.append_digit('9');
        engine.choose_operation(Operation::Multiply);
        engine.append_digit('9');
        engine.compute();
        assert_eq!(clipboard_text(engine.state()), "81");
    }
}
