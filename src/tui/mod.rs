//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only draws after an event arrives (or on
//! the first frame). Between events it blocks in `poll` for up to 500ms.
//! All pending events are drained before the next draw so a burst of key
//! repeats costs one frame.

mod component;
mod components;
mod event;
mod ui;

use log::info;
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core game logic)
#[derive(Debug, Default)]
pub struct TuiState {
    pub show_help: bool,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Hides the cursor for the lifetime of the game and shows it again on drop.
struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

pub fn run(app: &mut App) -> io::Result<()> {
    let mut terminal = ratatui::try_init()?;
    let result = TerminalModeGuard::new().and_then(|_guard| {
        let mut tui = TuiState::new();
        event_loop(&mut terminal, app, &mut tui)
    });
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, tui: &mut TuiState) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let mut pending = Some(first_event);
        while let Some(event) = pending {
            if handle_event(app, tui, event) == Effect::Quit {
                info!("Quitting after {} moves", app.moves);
                return Ok(());
            }
            pending = poll_event_immediate()?;
        }
    }
}

/// Apply one terminal event to the game. Returns the reducer's effect.
fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::Move(direction) => update(app, Action::Move(direction)),
        TuiEvent::Restart => update(app, Action::Restart),
        TuiEvent::Quit | TuiEvent::ForceQuit => update(app, Action::Quit),
        TuiEvent::ToggleHelp => {
            tui.show_help = !tui.show_help;
            Effect::None
        }
        // Resize just needs a redraw (already flagged by the caller)
        TuiEvent::Resize => Effect::None,
    }
}
