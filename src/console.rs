//! # Console Adapter
//!
//! The line-at-a-time front-end. Each turn prints the grid and a prompt,
//! reads one line, and feeds it through `core::action::update`.
//!
//! ```text
//! render → prompt → read line → parse → update → won? → repeat
//! ```
//!
//! Generic over `BufRead`/`Write` so tests can drive it with byte slices.
//! Blocked moves and unknown commands print nothing extra: the next grid
//! is simply unchanged.

use std::io::{self, BufRead, Write};

use log::info;

use crate::core::action::{Effect, parse_command, update};
use crate::core::state::{App, WIN_MESSAGE};

pub const PROMPT: &str = "Move (WASD): ";

/// How a console session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Won,
    /// Input reached end-of-file before the goal.
    InputClosed,
}

pub fn play<R: BufRead, W: Write>(app: &mut App, mut input: R, output: &mut W) -> io::Result<SessionEnd> {
    if app.won {
        writeln!(output, "{WIN_MESSAGE}")?;
        return Ok(SessionEnd::Won);
    }

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", app.walker.render())?;
        write!(output, "{PROMPT}")?;
        output.flush()?;

        buf.clear();
        // Raw bytes: a line that isn't UTF-8 is just an unknown command.
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            info!("Input closed after {} moves", app.moves);
            return Ok(SessionEnd::InputClosed);
        }

        // Console commands never parse to `Action::Quit`; only the TUI quits.
        if update(app, parse_command(&String::from_utf8_lossy(&buf))) == Effect::Won {
            writeln!(output, "{WIN_MESSAGE}")?;
            return Ok(SessionEnd::Won);
        }
    }
}

/// Run a session on the process's stdin/stdout.
pub fn run(app: &mut App) -> io::Result<SessionEnd> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play(app, stdin.lock(), &mut stdout)
}
