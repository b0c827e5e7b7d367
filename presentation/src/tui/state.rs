//! TUI application state
//!
//! Single source of truth for everything the TUI renders. Updated only by
//! the event loop; every transition is a plain method call, testable
//! without a terminal.

use crate::wizard::WizardState;
use cardio_application::{GatewayError, RequestLifecycle};
use cardio_domain::{ClinicalRecord, ConsensusResult, FieldDomain, FieldId, Section};
use std::time::Instant;

/// Which results pane is showing after a successful submission.
///
/// Independent UI state, not part of the request lifecycle; resets to
/// Consensus on every new success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultsTab {
    #[default]
    Consensus,
    Models,
}

impl ResultsTab {
    pub fn toggled(self) -> Self {
        match self {
            ResultsTab::Consensus => ResultsTab::Models,
            ResultsTab::Models => ResultsTab::Consensus,
        }
    }
}

/// In-progress text entry for a scalar field.
#[derive(Debug, Clone)]
pub struct EditBuffer {
    pub field: FieldId,
    pub input: String,
}

/// Central TUI state — owned by the select! loop.
pub struct AppState {
    // -- Wizard --
    pub wizard: WizardState,
    /// Index of the focused field within the active section.
    pub focus: usize,
    /// Text buffer while a scalar field is being edited.
    pub editing: Option<EditBuffer>,

    // -- Submission --
    pub lifecycle: RequestLifecycle,

    // -- Results surface --
    pub results_tab: ResultsTab,

    // -- Overlay --
    pub flash_message: Option<(String, Instant)>,

    // -- Presentation options --
    pub show_completion: bool,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            wizard: WizardState::new(),
            focus: 0,
            editing: None,
            lifecycle: RequestLifecycle::Idle,
            results_tab: ResultsTab::default(),
            flash_message: None,
            show_completion: true,
            should_quit: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Field focus --

    /// Fields of the active section, in display order.
    pub fn section_fields(&self) -> Vec<FieldId> {
        cardio_domain::fields_in(self.wizard.active_section)
            .map(|spec| spec.id)
            .collect()
    }

    /// The currently focused field.
    pub fn focused_field(&self) -> FieldId {
        let fields = self.section_fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    pub fn focus_next(&mut self) {
        let count = self.section_fields().len();
        self.focus = (self.focus + 1) % count;
    }

    pub fn focus_prev(&mut self) {
        let count = self.section_fields().len();
        self.focus = (self.focus + count - 1) % count;
    }

    // -- Section navigation (resets focus; drafts are committed or dropped) --

    pub fn go_to_section(&mut self, section: Section) {
        self.editing = None;
        self.wizard.go_to_section(section);
        self.focus = 0;
    }

    pub fn next_section(&mut self) {
        self.editing = None;
        self.wizard.next_section();
        self.focus = 0;
    }

    pub fn prev_section(&mut self) {
        self.editing = None;
        self.wizard.prev_section();
        self.focus = 0;
    }

    // -- Scalar editing --

    /// Open an edit buffer for the focused field, if it is a scalar.
    pub fn begin_edit(&mut self) {
        let field = self.focused_field();
        match field.spec().domain {
            FieldDomain::Integer { .. } | FieldDomain::Decimal { .. } => {
                self.editing = Some(EditBuffer {
                    field,
                    input: String::new(),
                });
            }
            _ => {}
        }
    }

    pub fn push_edit_char(&mut self, c: char) {
        if let Some(edit) = &mut self.editing {
            if c.is_ascii_digit() || c == '.' || c == '-' {
                edit.input.push(c);
            }
        }
    }

    pub fn pop_edit_char(&mut self) {
        if let Some(edit) = &mut self.editing {
            edit.input.pop();
        }
    }

    /// Commit the edit buffer through wizard coercion.
    ///
    /// Non-numeric input is rejected silently: the field keeps its prior
    /// value, matching the coercion policy of the form.
    pub fn commit_edit(&mut self) {
        if let Some(edit) = self.editing.take() {
            self.wizard.set_field(edit.field, &edit.input);
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Step a flag or category field through its options.
    pub fn cycle_option(&mut self, delta: i64) {
        let field = self.focused_field();
        let domain = field.spec().domain;
        let max = match domain {
            FieldDomain::Flag { .. } => 1,
            FieldDomain::Category { labels } => labels.len() as i64 - 1,
            _ => return,
        };
        let current = self.wizard.record.value(field) as i64;
        let next = (current + delta).rem_euclid(max + 1);
        self.wizard.set_field_value(field, next as f64);
    }

    /// Nudge a scalar field by its step without opening an edit buffer.
    pub fn nudge_scalar(&mut self, direction: f64) {
        let field = self.focused_field();
        let spec = field.spec();
        let step = match spec.domain {
            FieldDomain::Integer { .. } => 1.0,
            FieldDomain::Decimal { .. } => 0.1,
            _ => return,
        };
        let next = (self.wizard.record.value(field) + direction * step)
            .clamp(spec.domain.min_value(), spec.domain.max_value());
        self.wizard.set_field_value(field, next);
    }

    // -- Submission --

    /// Try to start a submission.
    ///
    /// Returns the record to send, or None when the submit is refused:
    /// only offered from the final section, and a no-op while a request
    /// is already Pending.
    pub fn begin_submission(&mut self) -> Option<ClinicalRecord> {
        if !self.wizard.on_final_section() {
            return None;
        }
        if !self.lifecycle.begin() {
            return None;
        }
        self.editing = None;
        Some(self.wizard.record.clone())
    }

    /// Apply a submission outcome delivered by the event loop.
    ///
    /// On success the results surface resets to the consensus tab. On
    /// failure the wizard section and record are untouched, ready for
    /// resubmission.
    pub fn finish_submission(&mut self, outcome: Result<ConsensusResult, GatewayError>) {
        let succeeded = outcome.is_ok();
        self.lifecycle.complete(outcome);
        if succeeded {
            self.results_tab = ResultsTab::Consensus;
        }
    }

    pub fn toggle_results_tab(&mut self) {
        if self.lifecycle.result().is_some() {
            self.results_tab = self.results_tab.toggled();
        }
    }

    /// Show a specific results tab; ignored until a result exists.
    pub fn show_results_tab(&mut self, tab: ResultsTab) {
        if self.lifecycle.result().is_some() {
            self.results_tab = tab;
        }
    }

    // -- Flash messages --

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: std::time::Duration) {
        if let Some((_, created)) = &self.flash_message {
            if created.elapsed() > max_age {
                self.flash_message = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> ConsensusResult {
        serde_json::from_str(
            r#"{
                "predictions": {
                    "knn": {"prediction": 1, "probability": 0.8, "risk_level": "High risk of heart disease"}
                },
                "consensus_prediction": 1,
                "consensus_risk_level": "High risk of heart disease",
                "recommendation": "Please consult a healthcare professional for a thorough evaluation.",
                "model_agreement_percentage": 100.0
            }"#,
        )
        .unwrap()
    }

    fn on_final_section(state: &mut AppState) {
        state.go_to_section(Section::Tests);
    }

    #[test]
    fn test_focus_wraps_within_section() {
        let mut state = AppState::new();
        assert_eq!(state.section_fields().len(), 3);
        assert_eq!(state.focused_field(), FieldId::Age);

        state.focus_next();
        assert_eq!(state.focused_field(), FieldId::Sex);
        state.focus_next();
        state.focus_next();
        assert_eq!(state.focused_field(), FieldId::Age);

        state.focus_prev();
        assert_eq!(state.focused_field(), FieldId::ChestPainType);
    }

    #[test]
    fn test_section_change_resets_focus_and_edit() {
        let mut state = AppState::new();
        state.focus_next();
        state.begin_edit();
        state.next_section();
        assert_eq!(state.focus, 0);
        assert!(state.editing.is_none());
        assert_eq!(state.wizard.active_section, Section::Vitals);
    }

    #[test]
    fn test_edit_commit_coerces() {
        let mut state = AppState::new();
        // Age is focused
        state.begin_edit();
        for c in "63.7".chars() {
            state.push_edit_char(c);
        }
        state.commit_edit();
        assert_eq!(state.wizard.record.value(FieldId::Age), 64.0);
    }

    #[test]
    fn test_edit_rejects_letters_and_empty_commit_keeps_value() {
        let mut state = AppState::new();
        state.begin_edit();
        state.push_edit_char('x');
        assert_eq!(state.editing.as_ref().unwrap().input, "");
        state.commit_edit();
        assert_eq!(state.wizard.record.value(FieldId::Age), 50.0);
    }

    #[test]
    fn test_begin_edit_only_for_scalars() {
        let mut state = AppState::new();
        state.focus_next(); // Sex, a flag
        state.begin_edit();
        assert!(state.editing.is_none());
    }

    #[test]
    fn test_cycle_option_wraps() {
        let mut state = AppState::new();
        state.focus_next(); // Sex: default 1 (Male)
        state.cycle_option(1);
        assert_eq!(state.wizard.record.value(FieldId::Sex), 0.0);
        state.cycle_option(1);
        assert_eq!(state.wizard.record.value(FieldId::Sex), 1.0);

        state.focus_next(); // ChestPainType: 0..=3
        state.cycle_option(-1);
        assert_eq!(state.wizard.record.value(FieldId::ChestPainType), 3.0);
    }

    #[test]
    fn test_nudge_scalar_clamps_to_domain() {
        let mut state = AppState::new();
        state.wizard.set_field_value(FieldId::Age, 100.0);
        state.nudge_scalar(1.0);
        assert_eq!(state.wizard.record.value(FieldId::Age), 100.0);
        state.nudge_scalar(-1.0);
        assert_eq!(state.wizard.record.value(FieldId::Age), 99.0);
    }

    #[test]
    fn test_submission_only_from_final_section() {
        let mut state = AppState::new();
        assert!(state.begin_submission().is_none());

        on_final_section(&mut state);
        assert!(state.begin_submission().is_some());
    }

    #[test]
    fn test_submit_while_pending_is_noop() {
        let mut state = AppState::new();
        on_final_section(&mut state);

        assert!(state.begin_submission().is_some());
        // Second submit while Pending must not produce a record
        assert!(state.begin_submission().is_none());
        assert!(state.lifecycle.is_pending());
    }

    #[test]
    fn test_success_resets_results_tab() {
        let mut state = AppState::new();
        on_final_section(&mut state);
        state.begin_submission();
        state.finish_submission(Ok(sample_result()));

        state.toggle_results_tab();
        assert_eq!(state.results_tab, ResultsTab::Models);

        // Next success lands back on the consensus tab
        state.begin_submission();
        state.finish_submission(Ok(sample_result()));
        assert_eq!(state.results_tab, ResultsTab::Consensus);
    }

    #[test]
    fn test_failure_keeps_wizard_state() {
        let mut state = AppState::new();
        on_final_section(&mut state);
        state.wizard.set_field_value(FieldId::StDepression, 2.3);
        let before = state.wizard.record.clone();

        state.begin_submission();
        state.finish_submission(Err(GatewayError::Http(500)));

        assert!(state.lifecycle.error().unwrap().contains("500"));
        assert_eq!(state.wizard.record, before);
        assert_eq!(state.wizard.active_section, Section::Tests);
        // Resubmittable
        assert!(state.begin_submission().is_some());
    }

    #[test]
    fn test_toggle_results_tab_needs_a_result() {
        let mut state = AppState::new();
        state.toggle_results_tab();
        assert_eq!(state.results_tab, ResultsTab::Consensus);
    }

    #[test]
    fn test_flash_message_expiry() {
        let mut state = AppState::new();
        state.set_flash("saved");
        assert!(state.flash_message.is_some());
        state.expire_flash(std::time::Duration::from_secs(5));
        assert!(state.flash_message.is_some());
        state.expire_flash(std::time::Duration::ZERO);
        assert!(state.flash_message.is_none());
    }
}
