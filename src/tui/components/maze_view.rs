//! # MazeView Component
//!
//! Draws the grid inside a bordered box, centered in its area, with the mouse
//! overlaid on its cell. Walls, floor, cheese and mouse get distinct styles.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::maze::{Cell, Position};
use crate::core::walker::Walker;
use crate::tui::component::Component;

pub struct MazeView<'a> {
    pub walker: &'a Walker,
    pub won: bool,
}

impl<'a> MazeView<'a> {
    pub fn new(walker: &'a Walker, won: bool) -> Self {
        Self { walker, won }
    }

    fn cell_span(cell: Cell) -> Span<'static> {
        let style = match cell {
            Cell::Wall => Style::default().fg(Color::DarkGray),
            Cell::Floor => Style::default(),
            Cell::Goal => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        };
        Span::styled(cell.as_char().to_string(), style)
    }

    fn player_span(&self) -> Span<'static> {
        let color = if self.won { Color::Yellow } else { Color::Cyan };
        Span::styled(
            self.walker.marker().to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    }

    /// Size of one axis including the border, clamped to what a terminal can address.
    fn boxed_len(cells: usize) -> u16 {
        u16::try_from(cells).unwrap_or(u16::MAX).saturating_add(2)
    }

    /// One styled line per maze row.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let player = self.walker.position();
        self.walker
            .maze()
            .rows()
            .enumerate()
            .map(|(y, row)| {
                let spans: Vec<Span> = row
                    .iter()
                    .enumerate()
                    .map(|(x, cell)| {
                        if player == Position::new(x, y) {
                            self.player_span()
                        } else {
                            Self::cell_span(*cell)
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

impl Component for MazeView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let maze = self.walker.maze();
        let width = Self::boxed_len(maze.width());
        let height = Self::boxed_len(maze.height());

        let [column] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let [boxed] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(column);

        let title = if self.won { " Cheese! " } else { " Maze " };
        let paragraph = Paragraph::new(self.lines()).block(Block::bordered().title(title));
        frame.render_widget(paragraph, boxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use crate::core::maze::Maze;

    fn rows_of(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_lines_match_rendered_text() {
        let walker = Walker::classic();
        let view = MazeView::new(&walker, false);
        let text: Vec<String> = view.lines().iter().map(|l| l.to_string()).collect();
        let expected: Vec<String> = walker.render().lines().map(str::to_string).collect();
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_draws_grid_with_player() {
        let backend = TestBackend::new(40, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let walker = Walker::classic();
        terminal
            .draw(|f| MazeView::new(&walker, false).render(f, f.area()))
            .unwrap();

        let rows = rows_of(&terminal);
        assert!(rows.iter().any(|r| r.contains("#M       #")));
        assert!(rows.iter().any(|r| r.contains("#C       #")));
        assert!(rows.iter().any(|r| r.contains("Maze")));
    }

    #[test]
    fn test_render_won_title() {
        let backend = TestBackend::new(40, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let walker = Walker::classic();
        terminal
            .draw(|f| MazeView::new(&walker, true).render(f, f.area()))
            .unwrap();
        assert!(rows_of(&terminal).iter().any(|r| r.contains("Cheese!")));
    }

    #[test]
    fn test_render_in_tiny_area_does_not_panic() {
        let backend = TestBackend::new(5, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let walker = Walker::classic();
        terminal
            .draw(|f| MazeView::new(&walker, false).render(f, f.area()))
            .unwrap();
    }

    #[test]
    fn test_boxed_len_saturates() {
        assert_eq!(MazeView::boxed_len(10), 12);
        assert_eq!(MazeView::boxed_len(65_533), u16::MAX);
        assert_eq!(MazeView::boxed_len(65_536), u16::MAX);
        assert_eq!(MazeView::boxed_len(70_000), u16::MAX);
    }

    #[test]
    fn test_very_wide_maze_fills_area() {
        // 65539 columns: a wrapping cast would shrink the box to 5 wide.
        let row = format!("#{}C#", " ".repeat(65_536));
        let maze = Maze::from_rows(&[row]).unwrap();
        let walker = Walker::new(maze, Position::new(1, 0)).unwrap();

        let backend = TestBackend::new(20, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| MazeView::new(&walker, false).render(f, f.area()))
            .unwrap();

        let rows = rows_of(&terminal);
        assert!(rows[0].starts_with('┌'));
        assert!(rows[0].ends_with('┐'));
        assert!(rows[1].starts_with("│#M"));
    }
}
