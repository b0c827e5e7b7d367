//! Status bar — lifecycle badge, key hints, and flash messages.

use crate::tui::state::AppState;
use cardio_application::RequestLifecycle;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a AppState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Badge text and color for the current request state.
    fn badge(&self) -> (&'static str, Color) {
        match self.state.lifecycle {
            RequestLifecycle::Idle => ("READY", Color::Blue),
            RequestLifecycle::Pending => ("SENDING", Color::Yellow),
            RequestLifecycle::Succeeded(_) => ("RESULT", Color::Green),
            RequestLifecycle::Failed(_) => ("ERROR", Color::Red),
        }
    }

    fn hints(&self) -> &'static str {
        if self.state.editing.is_some() {
            "Enter: apply  Esc: discard  digits/.: type"
        } else if self.state.lifecycle.is_pending() {
            "Submitting...  q: quit"
        } else if self.state.wizard.on_final_section() {
            "s: submit  Tab/1-3: section  j/k: field  h/l: change  Enter: edit  q: quit"
        } else {
            "Tab/1-3: section  j/k: field  h/l: change  Enter: edit  q: quit"
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bar_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        buf.set_style(area, bar_style);

        let (badge_text, badge_color) = self.badge();
        let badge = Span::styled(
            format!(" {badge_text} "),
            Style::default()
                .fg(Color::Black)
                .bg(badge_color)
                .add_modifier(Modifier::BOLD),
        );

        let message = if let Some((flash, _)) = &self.state.flash_message {
            Span::styled(
                format!(" {flash} "),
                Style::default().bg(Color::DarkGray).fg(Color::Yellow),
            )
        } else {
            Span::styled(format!(" {} ", self.hints()), bar_style)
        };

        buf.set_line(area.x, area.y, &Line::from(vec![badge, message]), area.width);
    }
}
