//! # Application State
//!
//! Core game state for mousemaze. Domain logic only, no terminal types.
//! Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── walker: Walker                     // maze + mouse position
//! ├── moves: u32                         // accepted moves
//! ├── blocked: u32                       // moves into walls or edges
//! ├── last_outcome: Option<MoveOutcome>  // result of the latest move
//! ├── status_message: String             // status line text
//! └── won: bool                          // mouse is on the cheese
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::maze::{Maze, MazeError, MoveOutcome};
use crate::core::walker::Walker;

pub const WIN_MESSAGE: &str = "You've found the cheese! Game over.";
pub const WELCOME_MESSAGE: &str = "Find the cheese!";

#[derive(Debug)]
pub struct App {
    pub walker: Walker,
    pub moves: u32,
    pub blocked: u32,
    pub last_outcome: Option<MoveOutcome>,
    pub status_message: String,
    pub won: bool,
}

impl App {
    pub fn new(walker: Walker) -> Self {
        let won = walker.is_won();
        Self {
            walker,
            moves: 0,
            blocked: 0,
            last_outcome: None,
            status_message: (if won { WIN_MESSAGE } else { WELCOME_MESSAGE }).to_string(),
            won,
        }
    }

    /// Build the game from resolved settings: the configured maze file (or
    /// the built-in layout), start cell and player marker.
    pub fn from_config(config: &ResolvedConfig) -> Result<Self, MazeError> {
        let maze = match &config.maze_file {
            Some(path) => Maze::load(path)?,
            None => Maze::classic(),
        };
        let walker = Walker::new(maze, config.start)?.with_marker(config.player_marker);
        Ok(Self::new(walker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::maze::Position;
    use crate::test_support::{test_app, test_config};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, WELCOME_MESSAGE);
        assert_eq!(app.moves, 0);
        assert_eq!(app.blocked, 0);
        assert!(!app.won);
        assert!(app.last_outcome.is_none());
    }

    #[test]
    fn test_app_starting_on_goal_is_already_won() {
        let maze = Maze::classic();
        let walker = Walker::new(maze, Position::new(1, 8)).unwrap();
        let app = App::new(walker);
        assert!(app.won);
        assert_eq!(app.status_message, WIN_MESSAGE);
    }

    #[test]
    fn test_from_config_uses_start_and_marker() {
        let mut config = test_config();
        config.start = Position::new(2, 1);
        config.player_marker = '@';
        let app = App::from_config(&config).unwrap();
        assert_eq!(app.walker.position(), Position::new(2, 1));
        assert!(app.walker.render().contains('@'));
    }

    #[test]
    fn test_from_config_loads_maze_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maze.txt");
        std::fs::write(&path, "#####\n#  C#\n#####\n").unwrap();
        let mut config = test_config();
        config.maze_file = Some(path);
        let app = App::from_config(&config).unwrap();
        assert_eq!(app.walker.maze().goal(), Position::new(3, 1));
    }

    #[test]
    fn test_from_config_rejects_wall_start() {
        let mut config = test_config();
        config.start = Position::new(0, 0);
        assert!(matches!(
            App::from_config(&config),
            Err(MazeError::StartNotWalkable(_))
        ));
    }
}
