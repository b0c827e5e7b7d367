//! Completion gauge — the derived progress view over the record.

use crate::tui::state::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Gauge, Widget},
};

pub struct CompletionWidget<'a> {
    state: &'a AppState,
}

impl<'a> CompletionWidget<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for CompletionWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let percent = self.state.wizard.completion_percentage();
        let color = if percent == 100 {
            Color::Green
        } else {
            Color::Cyan
        };

        Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" Completion "))
            .gauge_style(Style::default().fg(color))
            .percent(percent as u16)
            .label(format!("{percent}%"))
            .render(area, buf);
    }
}
