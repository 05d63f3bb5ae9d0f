use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{HelpBar, MazeView, TitleBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(app.moves, app.blocked, app.status_message.clone(), app.won)
        .render(frame, title_area);
    MazeView::new(&app.walker, app.won).render(frame, main_area);
    HelpBar {
        expanded: tui.show_help,
    }
    .render(frame, help_area);
}
