//! # HelpBar Component
//!
//! Bottom line listing the keys. Collapsed by default; `?` expands it.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::tui::component::Component;

const COLLAPSED: &str = "? help · q quit";
const EXPANDED: &str = "w/a/s/d or arrows move · r restart · q/Esc quit · ? hide help";

pub struct HelpBar {
    pub expanded: bool,
}

impl HelpBar {
    pub fn text(&self) -> &'static str {
        if self.expanded { EXPANDED } else { COLLAPSED }
    }
}

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Span::styled(self.text(), Style::default().fg(Color::DarkGray)),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_text_toggles() {
        assert_eq!(HelpBar { expanded: false }.text(), COLLAPSED);
        assert!(HelpBar { expanded: true }.text().contains("restart"));
    }
}
