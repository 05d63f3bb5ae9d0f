//! # Actions
//!
//! Everything that can happen in the game becomes an `Action`.
//! User types `d`? That's `Action::Move(Direction::Right)`.
//! User types `q`? That's `Action::Unrecognized("q")`, a no-op.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` telling the front-end what to do next.
//! No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::maze::{Direction, MoveOutcome};
use crate::core::state::{App, WELCOME_MESSAGE, WIN_MESSAGE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    /// Input that maps to no command. Carries the raw text for the status line.
    Unrecognized(String),
    Restart,
    Quit,
}

/// What the front-end should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The mouse just reached the cheese.
    Won,
    Quit,
}

/// Map a line of input to an action using its first non-whitespace character.
/// `w a s d` move; everything else, including an empty line, is unrecognized.
pub fn parse_command(line: &str) -> Action {
    let trimmed = line.trim();
    match trimmed.chars().next().and_then(Direction::from_key) {
        Some(direction) => Action::Move(direction),
        None => Action::Unrecognized(trimmed.to_string()),
    }
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Move(direction) => {
            if app.won {
                return Effect::None;
            }
            let outcome = app.walker.apply_move(direction);
            app.last_outcome = Some(outcome);
            match outcome {
                MoveOutcome::Moved => {
                    app.moves += 1;
                    app.status_message = format!("Moved {}", direction.label());
                }
                MoveOutcome::BlockedByWall | MoveOutcome::BlockedByBounds => {
                    app.blocked += 1;
                    app.status_message = format!("Can't go {}: {}", direction.label(), outcome.label());
                }
            }
            if app.walker.is_won() {
                info!("Goal reached in {} moves ({} blocked)", app.moves, app.blocked);
                app.won = true;
                app.status_message = WIN_MESSAGE.to_string();
                return Effect::Won;
            }
            Effect::None
        }
        Action::Unrecognized(text) => {
            app.last_outcome = None;
            if !app.won {
                app.status_message = if text.is_empty() {
                    "Use w, a, s or d to move".to_string()
                } else {
                    format!("Unknown command: {text}")
                };
            }
            Effect::None
        }
        Action::Restart => {
            info!("Restarting after {} moves", app.moves);
            app.walker.reset();
            app.moves = 0;
            app.blocked = 0;
            app.last_outcome = None;
            app.won = app.walker.is_won();
            app.status_message = WELCOME_MESSAGE.to_string();
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
