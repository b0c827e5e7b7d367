//! Results surface — loading, error, consensus banner, and model table.
//!
//! Renders one of four shapes depending on the request lifecycle:
//! no-result hint, loading, error banner, or (on success) the consensus
//! tab / models tab pair.

use crate::interpret::ResultView;
use crate::tui::state::{AppState, ResultsTab};
use cardio_application::RequestLifecycle;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table, Widget, Wrap},
};

pub struct ResultsWidget<'a> {
    state: &'a AppState,
}

impl<'a> ResultsWidget<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn block(title: &str) -> Block<'_> {
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {title} "))
            .style(Style::default().fg(Color::White))
    }

    fn render_placeholder(area: Rect, buf: &mut Buffer, text: &str, color: Color) {
        Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(color),
        )))
        .block(Self::block("Results"))
        .wrap(Wrap { trim: true })
        .render(area, buf);
    }

    fn render_consensus(view: &ResultView, area: Rect, buf: &mut Buffer) {
        let consensus = &view.consensus;
        let badge_style = Style::default()
            .fg(consensus.badge.color())
            .add_modifier(Modifier::BOLD);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(3)])
            .split(area);

        let lines = vec![
            Line::from(vec![
                Span::styled("Consensus: ", Style::default().fg(Color::White)),
                Span::styled(consensus.diagnosis, badge_style),
                Span::raw("   "),
                Span::styled(format!("[{}]", consensus.badge.label), badge_style),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Recommendation: ", Style::default().fg(Color::White)),
                Span::styled(
                    consensus.recommendation.as_str(),
                    Style::default().fg(Color::Yellow),
                ),
            ]),
        ];

        Paragraph::new(lines)
            .block(Self::block("Results — Consensus (m: models)"))
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" Model Agreement "))
            .gauge_style(Style::default().fg(consensus.badge.color()))
            .percent(consensus.agreement.round() as u16)
            .label(consensus.agreement_label.clone())
            .render(chunks[1], buf);
    }

    fn render_models(view: &ResultView, area: Rect, buf: &mut Buffer) {
        let header = Row::new(["Model", "Prediction", "Probability", "Confidence", "Risk Level"])
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );

        let rows: Vec<Row> = view
            .models
            .iter()
            .map(|model| {
                let accent = Style::default().fg(model.color());
                Row::new(vec![
                    Cell::from(model.name.clone()),
                    Cell::from(model.outcome).style(accent),
                    Cell::from(model.probability.clone()),
                    Cell::from(model.confidence.clone()),
                    Cell::from(model.risk_level.clone()).style(accent),
                ])
            })
            .collect();

        Table::new(
            rows,
            [
                Constraint::Length(22),
                Constraint::Length(16),
                Constraint::Length(12),
                Constraint::Length(12),
                Constraint::Min(20),
            ],
        )
        .header(header)
        .block(Self::block("Results — Models (c: consensus)"))
        .render(area, buf);
    }
}

impl<'a> Widget for ResultsWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match &self.state.lifecycle {
            RequestLifecycle::Idle => Self::render_placeholder(
                area,
                buf,
                "Fill in the three sections, then press s on the Tests tab to submit.",
                Color::DarkGray,
            ),
            RequestLifecycle::Pending => Self::render_placeholder(
                area,
                buf,
                "Consulting prediction models...",
                Color::Yellow,
            ),
            RequestLifecycle::Failed(message) => Self::render_placeholder(
                area,
                buf,
                &format!("Error: {message} (press s to retry)"),
                Color::Red,
            ),
            RequestLifecycle::Succeeded(result) => {
                let view = ResultView::project(result);
                match self.state.results_tab {
                    ResultsTab::Consensus => Self::render_consensus(&view, area, buf),
                    ResultsTab::Models => Self::render_models(&view, area, buf),
                }
            }
        }
    }
}
