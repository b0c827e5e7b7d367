//! Section tab bar.
//!
//! One tab per wizard section, numbered by its jump key. A filled dot
//! marks sections whose fields are all filled, so the remaining work is
//! visible without leaving the current section.

use crate::tui::state::AppState;
use cardio_domain::{Section, fields_in};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct SectionTabsWidget<'a> {
    state: &'a AppState,
}

impl<'a> SectionTabsWidget<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn section_complete(&self, section: Section) -> bool {
        fields_in(section).all(|spec| self.state.wizard.record.is_filled(spec.id))
    }

    fn tab_span(&self, index: usize, section: Section) -> Span<'static> {
        let marker = if self.section_complete(section) {
            "●"
        } else {
            "○"
        };
        let label = format!(" {} {} {} ", index + 1, section.label(), marker);

        let style = if section == self.state.wizard.active_section {
            Style::default()
                .fg(Color::White)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray).bg(Color::DarkGray)
        };
        Span::styled(label, style)
    }
}

impl<'a> Widget for SectionTabsWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bar_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        buf.set_style(area, bar_style);

        let spans: Vec<Span> = Section::ALL
            .iter()
            .enumerate()
            .flat_map(|(i, section)| [self.tab_span(i, *section), Span::styled(" ", bar_style)])
            .collect();

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
