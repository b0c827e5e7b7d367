//! Wizard Controller — section navigation, field coercion, completion.
//!
//! `WizardState` is a plain value type so every transition is unit-testable
//! without a terminal: the TUI mutates it on key events and reads it back
//! during render.

use cardio_domain::{ClinicalRecord, FieldDomain, FieldId, Section};

/// Working state of the multi-section input wizard.
#[derive(Debug, Clone)]
pub struct WizardState {
    pub record: ClinicalRecord,
    pub active_section: Section,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            record: ClinicalRecord::default(),
            active_section: Section::Demographics,
        }
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Field editing --

    /// Update a field from raw text input.
    ///
    /// The value is coerced to the field's declared domain: integral
    /// fields are rounded to whole numbers, ST depression to one decimal.
    /// Returns false and leaves the field unchanged when the text does not
    /// parse to a finite number.
    pub fn set_field(&mut self, id: FieldId, raw: &str) -> bool {
        let Ok(value) = raw.trim().parse::<f64>() else {
            return false;
        };
        self.set_field_value(id, value)
    }

    /// Update a field from an already-numeric value, with the same
    /// coercion rules as [`WizardState::set_field`].
    pub fn set_field_value(&mut self, id: FieldId, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        let coerced = match id.spec().domain {
            FieldDomain::Decimal { .. } => (value * 10.0).round() / 10.0,
            _ => value.round(),
        };
        self.record.set_value(id, coerced);
        true
    }

    // -- Section navigation --

    /// Jump straight to a section; no linear order is enforced.
    pub fn go_to_section(&mut self, section: Section) {
        self.active_section = section;
    }

    /// Advance to the next section, if there is one.
    pub fn next_section(&mut self) {
        if let Some(next) = self.active_section.next() {
            self.active_section = next;
        }
    }

    /// Go back to the previous section, if there is one.
    pub fn prev_section(&mut self) {
        if let Some(prev) = self.active_section.prev() {
            self.active_section = prev;
        }
    }

    /// Whether the active section is the one submission is offered from.
    pub fn on_final_section(&self) -> bool {
        self.active_section.is_final()
    }

    // -- Derived state --

    /// Filled fields out of 13 as a rounded integer percentage.
    ///
    /// Monotonic non-decreasing as zero values become non-zero, and always
    /// within [0, 100].
    pub fn completion_percentage(&self) -> u8 {
        let filled = self.record.filled_count() as f64;
        let total = FieldId::ALL.len() as f64;
        (filled / total * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_demographics_with_defaults() {
        let wizard = WizardState::new();
        assert_eq!(wizard.active_section, Section::Demographics);
        assert_eq!(wizard.record, ClinicalRecord::default());
    }

    #[test]
    fn test_set_field_coerces_integral_fields() {
        let mut wizard = WizardState::new();
        assert!(wizard.set_field(FieldId::Age, "63.7"));
        assert_eq!(wizard.record.value(FieldId::Age), 64.0);

        assert!(wizard.set_field(FieldId::RestingBloodPressure, " 145 "));
        assert_eq!(wizard.record.value(FieldId::RestingBloodPressure), 145.0);
    }

    #[test]
    fn test_set_field_rounds_st_depression_to_one_decimal() {
        let mut wizard = WizardState::new();
        assert!(wizard.set_field(FieldId::StDepression, "2.34"));
        assert_eq!(wizard.record.value(FieldId::StDepression), 2.3);

        assert!(wizard.set_field(FieldId::StDepression, "2.35"));
        assert_eq!(wizard.record.value(FieldId::StDepression), 2.4);
    }

    #[test]
    fn test_non_numeric_input_keeps_prior_value() {
        let mut wizard = WizardState::new();
        assert!(!wizard.set_field(FieldId::Age, "abc"));
        assert!(!wizard.set_field(FieldId::Age, ""));
        assert!(!wizard.set_field(FieldId::Age, "inf"));
        assert!(!wizard.set_field(FieldId::Age, "NaN"));
        assert_eq!(wizard.record.value(FieldId::Age), 50.0);
    }

    #[test]
    fn test_section_navigation() {
        let mut wizard = WizardState::new();
        wizard.next_section();
        assert_eq!(wizard.active_section, Section::Vitals);
        wizard.next_section();
        assert_eq!(wizard.active_section, Section::Tests);
        assert!(wizard.on_final_section());

        // Saturates at the ends
        wizard.next_section();
        assert_eq!(wizard.active_section, Section::Tests);

        wizard.go_to_section(Section::Demographics);
        wizard.prev_section();
        assert_eq!(wizard.active_section, Section::Demographics);
    }

    #[test]
    fn test_default_completion_is_54_percent() {
        // 7 of 13 filled: three flags plus age/trestbps/chol/thalach
        assert_eq!(WizardState::new().completion_percentage(), 54);
    }

    #[test]
    fn test_completion_monotonic_and_bounded() {
        let mut wizard = WizardState::new();
        let mut last = wizard.completion_percentage();

        let zero_defaults = [
            FieldId::ChestPainType,
            FieldId::RestingEcg,
            FieldId::StDepression,
            FieldId::StSlope,
            FieldId::VesselCount,
            FieldId::Thalassemia,
        ];
        for id in zero_defaults {
            wizard.set_field_value(id, 1.0);
            let now = wizard.completion_percentage();
            assert!(now >= last, "completion went backwards at {id:?}");
            assert!(now <= 100);
            last = now;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn test_flag_values_never_change_completion() {
        let mut wizard = WizardState::new();
        let before = wizard.completion_percentage();
        wizard.set_field_value(FieldId::Sex, 0.0);
        wizard.set_field_value(FieldId::FastingBloodSugar, 1.0);
        wizard.set_field_value(FieldId::ExerciseAngina, 0.0);
        assert_eq!(wizard.completion_percentage(), before);
    }

    #[test]
    fn test_zero_vessel_count_reads_incomplete() {
        // A legitimate clinical zero still reads unfilled — accepted
        // cosmetic inaccuracy of the progress indicator.
        let mut wizard = WizardState::new();
        wizard.set_field_value(FieldId::VesselCount, 2.0);
        let with_vessels = wizard.completion_percentage();
        wizard.set_field_value(FieldId::VesselCount, 0.0);
        assert!(wizard.completion_percentage() < with_vessels);
    }
}
