//! # Maze Walker
//!
//! A maze plus the one piece of mutable state in the game: where the mouse is.
//!
//! ```text
//! Walker
//! ├── maze: Maze          // read-only layout, goal derived from it
//! ├── start: Position     // where the mouse begins (and restarts)
//! ├── position: Position  // mutated only by accepted moves
//! └── marker: char        // drawn over the mouse's cell
//! ```

use log::debug;

use super::maze::{DEFAULT_PLAYER_MARKER, Direction, Maze, MazeError, MoveOutcome, Position};

/// Start cell of the built-in layout.
pub const DEFAULT_START: Position = Position::new(1, 1);

#[derive(Debug, Clone)]
pub struct Walker {
    maze: Maze,
    start: Position,
    position: Position,
    marker: char,
}

impl Walker {
    /// Place the mouse at `start`. The start must be a walkable cell.
    pub fn new(maze: Maze, start: Position) -> Result<Self, MazeError> {
        if !maze.is_walkable(start) {
            return Err(MazeError::StartNotWalkable(start));
        }
        Ok(Self {
            maze,
            start,
            position: start,
            marker: DEFAULT_PLAYER_MARKER,
        })
    }

    /// The built-in layout with the mouse at (1, 1).
    pub fn classic() -> Self {
        Self {
            maze: Maze::classic(),
            start: DEFAULT_START,
            position: DEFAULT_START,
            marker: DEFAULT_PLAYER_MARKER,
        }
    }

    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn marker(&self) -> char {
        self.marker
    }

    /// The grid as text with the mouse drawn in.
    pub fn render(&self) -> String {
        self.maze.render(self.position, self.marker)
    }

    /// Step one cell in `direction` if the destination is floor or goal.
    /// Blocked moves leave the position untouched.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        match self.maze.check_move(self.position, direction) {
            Ok(to) => {
                debug!("Move {}: {} -> {}", direction.label(), self.position, to);
                self.position = to;
                MoveOutcome::Moved
            }
            Err(outcome) => {
                debug!(
                    "Move {} from {} {}",
                    direction.label(),
                    self.position,
                    outcome.label()
                );
                outcome
            }
        }
    }

    pub fn is_won(&self) -> bool {
        self.position == self.maze.goal()
    }

    /// Put the mouse back on the start cell.
    pub fn reset(&mut self) {
        self.position = self.start;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::maze::{CLASSIC_LAYOUT, Cell};

    #[test]
    fn test_classic_starts_at_one_one() {
        let walker = Walker::classic();
        assert_eq!(walker.position(), Position::new(1, 1));
        assert!(!walker.is_won());
    }

    #[test]
    fn test_every_open_neighbour_of_start_is_reachable() {
        let start = Walker::classic();
        let mut checked = 0;
        for direction in Direction::ALL {
            let Some(to) = start.position().step(direction) else {
                continue;
            };
            if !start.maze().is_walkable(to) {
                continue;
            }
            let mut walker = start.clone();
            assert_eq!(walker.apply_move(direction), MoveOutcome::Moved);
            assert_eq!(walker.position(), to);
            checked += 1;
        }
        // (2, 1) and (1, 2) are floor around the start.
        assert_eq!(checked, 2);
    }

    #[test]
    fn test_every_wall_neighbour_of_start_blocks() {
        let start = Walker::classic();
        let mut checked = 0;
        for direction in Direction::ALL {
            let Some(to) = start.position().step(direction) else {
                continue;
            };
            if start.maze().cell(to) != Some(Cell::Wall) {
                continue;
            }
            let mut walker = start.clone();
            assert_eq!(walker.apply_move(direction), MoveOutcome::BlockedByWall);
            assert_eq!(walker.position(), start.position());
            checked += 1;
        }
        assert_eq!(checked, 2);
    }

    #[test]
    fn test_is_won_only_at_goal() {
        let maze = Maze::classic();
        for (y, row) in maze.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if !cell.is_walkable() {
                    continue;
                }
                let walker = Walker::new(maze.clone(), Position::new(x, y)).unwrap();
                assert_eq!(walker.is_won(), (x, y) == (1, 8), "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_render_overlays_marker_at_position() {
        let walker = Walker::classic();
        let rendered = walker.render();
        let row1 = rendered.lines().nth(1).unwrap();
        assert_eq!(row1, "#M       #");
        assert_eq!(rendered.lines().count(), CLASSIC_LAYOUT.len());
    }

    #[test]
    fn test_custom_marker() {
        let walker = Walker::classic().with_marker('@');
        assert!(walker.render().lines().nth(1).unwrap().starts_with("#@"));
    }

    #[test]
    fn test_new_rejects_wall_start() {
        let err = Walker::new(Maze::classic(), Position::new(0, 0)).unwrap_err();
        assert!(matches!(err, MazeError::StartNotWalkable(p) if p == Position::new(0, 0)));
    }

    #[test]
    fn test_new_rejects_off_grid_start() {
        let err = Walker::new(Maze::classic(), Position::new(40, 1)).unwrap_err();
        assert!(matches!(err, MazeError::StartNotWalkable(_)));
    }

    #[test]
    fn test_reset_returns_to_start() {
        let mut walker = Walker::classic();
        walker.apply_move(Direction::Right);
        walker.apply_move(Direction::Right);
        walker.reset();
        assert_eq!(walker.position(), DEFAULT_START);
    }
}
