//! Form widget — the fields of the active wizard section.

use crate::tui::state::AppState;
use cardio_domain::{FieldDomain, fields_in};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct FormWidget<'a> {
    state: &'a AppState,
}

impl<'a> FormWidget<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Displayed value for a field: option label for selects, formatted
    /// number for scalars, or the live edit buffer.
    fn value_text(&self, field: cardio_domain::FieldId) -> String {
        if let Some(edit) = &self.state.editing {
            if edit.field == field {
                return format!("{}_", edit.input);
            }
        }
        let value = self.state.wizard.record.value(field);
        let domain = field.spec().domain;
        match domain {
            FieldDomain::Flag { .. } | FieldDomain::Category { .. } => domain
                .option_label(value)
                .unwrap_or("?")
                .to_string(),
            FieldDomain::Decimal { .. } => format!("{value:.1}"),
            FieldDomain::Integer { .. } => format!("{value:.0}"),
        }
    }
}

impl<'a> Widget for FormWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focused_field();
        let mut lines: Vec<Line> = vec![Line::from("")];

        for spec in fields_in(self.state.wizard.active_section) {
            let is_focused = spec.id == focused;
            let marker = if is_focused { "› " } else { "  " };
            let filled = self.state.wizard.record.is_filled(spec.id);

            let label_style = if is_focused {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let value_style = if filled {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let hint = match spec.domain {
                FieldDomain::Integer { min, max } => format!("  [{min}-{max}]"),
                FieldDomain::Decimal { min, max } => format!("  [{min:.1}-{max:.1}]"),
                _ => String::new(),
            };

            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{:<45}", spec.label), label_style),
                Span::styled(self.value_text(spec.id), value_style),
                Span::styled(hint, Style::default().fg(Color::DarkGray)),
            ]));
            lines.push(Line::from(""));
        }

        let title = format!(" {} ", self.state.wizard.active_section.label());
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .style(Style::default().fg(Color::White)),
            )
            .render(area, buf);
    }
}
