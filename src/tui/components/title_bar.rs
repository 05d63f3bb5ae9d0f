//! # TitleBar Component
//!
//! Top status bar: game name, move counters and the current status message.
//!
//! Purely presentational. It receives all data as props and has no internal
//! state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.moves, app.blocked, app.status_message.clone(), app.won);
//! title_bar.render(frame, area);
//! ```
//!
//! The text reads `mousemaze | moves: 5 | blocked: 2 | Moved right`. Once the
//! game is won the status is shown in bold yellow.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Accepted moves so far
    pub moves: u32,
    /// Moves that hit a wall or an edge
    pub blocked: u32,
    /// Status line text (e.g. "Moved right", "Can't go up: blocked by wall")
    pub status_message: String,
    pub won: bool,
}

impl TitleBar {
    pub fn new(moves: u32, blocked: u32, status_message: String, won: bool) -> Self {
        Self {
            moves,
            blocked,
            status_message,
            won,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let status_style = if self.won {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let mut spans = vec![
            Span::styled("mousemaze", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(" | moves: {} | blocked: {}", self.moves, self.blocked)),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(self.status_message.clone(), status_style));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new(5, 2, "Moved right".to_string(), false);
        let text = rendered(&mut title_bar);
        assert!(text.starts_with("mousemaze | moves: 5 | blocked: 2 | Moved right"));
    }

    #[test]
    fn test_title_bar_without_status() {
        let mut title_bar = TitleBar::new(0, 0, String::new(), false);
        let text = rendered(&mut title_bar);
        assert!(text.contains("moves: 0"));
        assert_eq!(text.matches('|').count(), 2);
    }

    #[test]
    fn test_title_bar_won_is_highlighted() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut title_bar = TitleBar::new(25, 0, "Done".to_string(), true);
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        let status_col = text.find("Done").unwrap() as u16;
        assert_eq!(buffer[(status_col, 0)].fg, Color::Yellow);
    }
}
