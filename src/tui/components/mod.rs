//! # TUI Components
//!
//! All stateless, props-based display components for the terminal
//! interface. Each receives the data it needs as struct fields and renders
//! into a `Rect`; none of them reads global state.
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! ├── title_bar.rs   (Top status bar: counters and status)
//! ├── maze_view.rs   (The grid with the mouse on it)
//! └── help_bar.rs    (Key hints)
//! ```

pub mod help_bar;
pub mod maze_view;
pub mod title_bar;

pub use help_bar::HelpBar;
pub use maze_view::MazeView;
pub use title_bar::TitleBar;
