//! # Maze Grid
//!
//! The static layout the mouse walks around in. A layout is a list of text
//! rows where `#` is a wall, ` ` is floor and `C` is the cheese (the goal).
//!
//! ```text
//! ##########
//! #        #      (0,0) is the top-left corner.
//! # ####### #     x grows to the right, y grows downwards.
//! ...
//! #C       #      the goal is wherever the `C` marker sits
//! ##########
//! ```
//!
//! Rows are kept verbatim, so they do not have to share a width. Each row's
//! own length bounds it: stepping past the end of a row is out of bounds even
//! if a longer row exists elsewhere in the grid.
//!
//! A `Maze` is immutable once parsed. The goal coordinate is found by a single
//! scan at parse time, so the win check never drifts from the layout.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use log::{debug, info};

pub const WALL: char = '#';
pub const FLOOR: char = ' ';
pub const GOAL: char = 'C';

/// Marker drawn over the player's cell when rendering.
pub const DEFAULT_PLAYER_MARKER: char = 'M';

/// The built-in layout. Goal is at (1, 8).
pub const CLASSIC_LAYOUT: &[&str] = &[
    "##########",
    "#        #",
    "# ####### #",
    "# #     # #",
    "# # ### # #",
    "# # # # # #",
    "#   # #   #",
    "####### ###",
    "#C       #",
    "##########",
];

// ============================================================================
// Cells, Positions, Directions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Floor,
    Goal,
}

impl Cell {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            WALL => Some(Cell::Wall),
            FLOOR => Some(Cell::Floor),
            GOAL => Some(Cell::Goal),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Cell::Wall => WALL,
            Cell::Floor => FLOOR,
            Cell::Goal => GOAL,
        }
    }

    /// Floor and goal cells can be stepped on; walls cannot.
    pub fn is_walkable(self) -> bool {
        matches!(self, Cell::Floor | Cell::Goal)
    }
}

/// A (column, row) coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The neighbouring coordinate in `direction`, or `None` if it would go
    /// below zero on either axis.
    pub fn step(self, direction: Direction) -> Option<Position> {
        let Position { x, y } = self;
        match direction {
            Direction::Up => y.checked_sub(1).map(|y| Position { x, y }),
            Direction::Down => y.checked_add(1).map(|y| Position { x, y }),
            Direction::Left => x.checked_sub(1).map(|x| Position { x, y }),
            Direction::Right => x.checked_add(1).map(|x| Position { x, y }),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses `"X,Y"`, e.g. `"1,1"`.
impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("expected X,Y but got {s:?}"))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|e| format!("bad coordinate {part:?}: {e}"))
        };
        Ok(Position::new(parse(x)?, parse(y)?))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// WASD mapping. Case-sensitive: `W` is not `w`.
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            'w' => Some(Direction::Up),
            'a' => Some(Direction::Left),
            's' => Some(Direction::Down),
            'd' => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// What happened when a move was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// The destination exists but is a wall.
    BlockedByWall,
    /// The destination is off the grid (negative, past the last row, or past
    /// the end of its row).
    BlockedByBounds,
}

impl MoveOutcome {
    pub fn label(self) -> &'static str {
        match self {
            MoveOutcome::Moved => "moved",
            MoveOutcome::BlockedByWall => "blocked by wall",
            MoveOutcome::BlockedByBounds => "blocked by edge",
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum MazeError {
    /// No rows at all.
    Empty,
    /// A character that is not a wall, floor or goal.
    UnknownCell { row: usize, col: usize, found: char },
    /// The layout has no goal marker.
    MissingGoal,
    /// The layout has more than one goal marker.
    MultipleGoals { first: Position, second: Position },
    /// The requested start cell is a wall or off the grid.
    StartNotWalkable(Position),
    /// The layout file could not be read.
    Io(io::Error),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::Empty => write!(f, "maze layout is empty"),
            MazeError::UnknownCell { row, col, found } => {
                write!(f, "unknown cell {found:?} at row {row}, column {col}")
            }
            MazeError::MissingGoal => write!(f, "maze layout has no goal marker '{GOAL}'"),
            MazeError::MultipleGoals { first, second } => {
                write!(f, "maze layout has more than one goal: {first} and {second}")
            }
            MazeError::StartNotWalkable(pos) => write!(f, "start cell {pos} is not walkable"),
            MazeError::Io(e) => write!(f, "maze file I/O error: {e}"),
        }
    }
}

impl std::error::Error for MazeError {}

impl From<io::Error> for MazeError {
    fn from(e: io::Error) -> Self {
        MazeError::Io(e)
    }
}

// ============================================================================
// Maze
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    rows: Vec<Vec<Cell>>,
    goal: Position,
}

impl Maze {
    /// The built-in layout.
    pub fn classic() -> Self {
        Self::from_rows(CLASSIC_LAYOUT).expect("built-in layout has exactly one goal")
    }

    /// Parse a layout from text, one row per line. Trailing blank lines are
    /// ignored; spaces inside a line are floor and are kept.
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        let mut lines: Vec<&str> = text.lines().collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        Self::from_rows(&lines)
    }

    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MazeError> {
        if rows.is_empty() {
            return Err(MazeError::Empty);
        }

        let mut goal: Option<Position> = None;
        let mut parsed = Vec::with_capacity(rows.len());

        for (y, line) in rows.iter().enumerate() {
            let mut row = Vec::with_capacity(line.as_ref().len());
            for (x, c) in line.as_ref().chars().enumerate() {
                let cell = Cell::from_char(c).ok_or(MazeError::UnknownCell {
                    row: y,
                    col: x,
                    found: c,
                })?;
                if cell == Cell::Goal {
                    let here = Position::new(x, y);
                    if let Some(first) = goal {
                        return Err(MazeError::MultipleGoals {
                            first,
                            second: here,
                        });
                    }
                    goal = Some(here);
                }
                row.push(cell);
            }
            parsed.push(row);
        }

        let goal = goal.ok_or(MazeError::MissingGoal)?;
        debug!(
            "Parsed maze: {} rows, widest {}, goal at {}",
            parsed.len(),
            parsed.iter().map(Vec::len).max().unwrap_or(0),
            goal
        );
        Ok(Self { rows: parsed, goal })
    }

    /// Read and parse a layout file.
    pub fn load(path: &Path) -> Result<Self, MazeError> {
        let text = fs::read_to_string(path)?;
        let maze = Self::parse(&text)?;
        info!("Loaded maze from {}", path.display());
        Ok(maze)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the widest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Coordinate of the goal marker.
    pub fn goal(&self) -> Position {
        self.goal
    }

    /// The cell at `pos`, or `None` if it is off the grid.
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.rows.get(pos.y)?.get(pos.x).copied()
    }

    pub fn is_walkable(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(Cell::is_walkable)
    }

    /// Where a step from `from` in `direction` would land, if it is allowed.
    pub fn check_move(&self, from: Position, direction: Direction) -> Result<Position, MoveOutcome> {
        let to = from.step(direction).ok_or(MoveOutcome::BlockedByBounds)?;
        match self.cell(to) {
            None => Err(MoveOutcome::BlockedByBounds),
            Some(cell) if cell.is_walkable() => Ok(to),
            Some(_) => Err(MoveOutcome::BlockedByWall),
        }
    }

    /// Render the layout with `marker` drawn at `player`. Each row ends with
    /// a newline. A player off the grid is simply not drawn.
    pub fn render(&self, player: Position, marker: char) -> String {
        let mut out = String::with_capacity(self.rows.iter().map(|r| r.len() + 1).sum());
        for (y, row) in self.rows.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if player.x == x && player.y == y {
                    out.push(marker);
                } else {
                    out.push(cell.as_char());
                }
            }
            out.push('\n');
        }
        out
    }

    /// Iterate rows as cell slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }
}
