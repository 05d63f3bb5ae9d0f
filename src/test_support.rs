//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::UiMode;
use crate::core::config::{DEFAULT_BASE_DELAY_MS, DEFAULT_TIMEOUT_MS, ResolvedConfig};
use crate::core::maze::DEFAULT_PLAYER_MARKER;
use crate::core::state::App;
use crate::core::walker::{DEFAULT_START, Walker};

/// Moves from (1, 1) to the cheese in the built-in layout.
pub const CLASSIC_SOLUTION: &str = "sssssddwwwddddsssssaaaaaa";

/// Creates a test App on the built-in layout.
pub fn test_app() -> App {
    App::new(Walker::classic())
}

/// Resolved settings equal to the defaults, without touching env or disk.
pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        ui: UiMode::Console,
        maze_file: None,
        start: DEFAULT_START,
        player_marker: DEFAULT_PLAYER_MARKER,
        workers: vec!["alpha".into(), "beta".into(), "gamma".into()],
        base_delay_ms: DEFAULT_BASE_DELAY_MS,
        timeout_ms: DEFAULT_TIMEOUT_MS,
    }
}
