//! mousemaze library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod console;
pub mod core;
pub mod demos;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Which front-end drives the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UiMode {
    /// Line-at-a-time prompt on stdin/stdout.
    #[default]
    Console,
    /// Full-screen terminal UI.
    Tui,
}
