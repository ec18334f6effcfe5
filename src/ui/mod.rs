//! Interactive terminal front end.
//!
//! Owns the engine for the session, feeds it one key at a time and redraws
//! the readout after every command.

mod readout;

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event},
    execute, queue,
    style::Print,
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use std::io::{Stdout, Write, stdout};

use zcalc::calculator::{CalculatorEngine, DisplaySnapshot, clipboard_text, copy_to_clipboard};
use zcalc::input::{KeyAction, key_action};

use readout::{HELP_LINE, readout_lines};

/// Readout width cap so the numbers stay near the left on wide terminals.
const MAX_READOUT_WIDTH: usize = 32;

struct TerminalSession {
    out: Stdout,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        Ok(Self { out })
    }

    fn draw(&mut self, snapshot: &DisplaySnapshot, status: Option<&str>) -> Result<()> {
        let (columns, _) = terminal::size()?;
        let width = usize::from(columns).clamp(1, MAX_READOUT_WIDTH);
        let [history, display] = readout_lines(snapshot, width);

        queue!(
            self.out,
            Clear(ClearType::All),
            MoveTo(0, 0),
            Print(history),
            MoveTo(0, 1),
            Print(display),
            MoveTo(0, 3),
            Print(status.unwrap_or_default()),
            MoveTo(0, 5),
            Print(HELP_LINE),
        )?;
        self.out.flush()?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
    }
}

/// Run the interactive calculator until the user quits.
pub fn run(mut engine: CalculatorEngine) -> Result<()> {
    let mut session = TerminalSession::new()?;
    let mut status: Option<String> = None;
    let mut snapshot = engine.snapshot();

    loop {
        session.draw(&snapshot, status.as_deref())?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        let Some(action) = key_action(key) else {
            continue;
        };

        match action {
            KeyAction::Quit => return Ok(()),
            KeyAction::Copy => {
                let text = clipboard_text(engine.state());
                status = Some(match copy_to_clipboard(text) {
                    Ok(()) => format!("Copied {}", text),
                    Err(err) => {
                        tracing::warn!("{}", err);
                        err.to_string()
                    }
                });
            }
            KeyAction::Command(command) => {
                snapshot = engine.apply(command);
                status = None;
            }
        }
    }
}
