//! # Core Game Logic
//!
//! This module contains the maze game's rules.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Maze (grid + goal)   │
//!                    │  • Walker (position)    │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │  Console   │          │    TUI     │
//!             │  Adapter   │          │  Adapter   │
//!             │ (line I/O) │          │ (ratatui)  │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`maze`]: The `Maze` grid, cells, positions and move outcomes
//! - [`walker`]: The `Walker`, a maze plus the mouse's position
//! - [`state`]: The `App` struct, all game state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Settings with defaults → file → env → CLI precedence

pub mod action;
pub mod config;
pub mod maze;
pub mod state;
pub mod walker;
