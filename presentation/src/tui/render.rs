//! Frame layout and top-level render pass.

use super::state::AppState;
use super::widgets::{
    CompletionWidget, FormWidget, ResultsWidget, SectionTabsWidget, StatusBarWidget,
};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computed areas for every widget on screen.
pub struct MainLayout {
    pub tab_bar: Rect,
    pub form: Rect,
    pub completion: Rect,
    pub results: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect, show_completion: bool) -> Self {
        let gauge_height = if show_completion { 3 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),  // section tabs
                Constraint::Length(13), // form (5 fields max, 2 rows each)
                Constraint::Length(gauge_height), // completion gauge
                Constraint::Min(8),     // results
                Constraint::Length(1),  // status bar
            ])
            .split(area);

        Self {
            tab_bar: chunks[0],
            form: chunks[1],
            completion: chunks[2],
            results: chunks[3],
            status_bar: chunks[4],
        }
    }
}

/// Render all widgets for one frame.
pub fn render(frame: &mut Frame, state: &AppState) {
    let layout = MainLayout::compute(frame.area(), state.show_completion);

    frame.render_widget(SectionTabsWidget::new(state), layout.tab_bar);
    frame.render_widget(FormWidget::new(state), layout.form);
    if state.show_completion {
        frame.render_widget(CompletionWidget::new(state), layout.completion);
    }
    frame.render_widget(ResultsWidget::new(state), layout.results);
    frame.render_widget(StatusBarWidget::new(state), layout.status_bar);
}
