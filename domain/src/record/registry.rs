//! Field Registry — the fixed schema of the thirteen clinical measurements.
//!
//! Pure data, no behavior: each field declares its wire name, display label,
//! numeric domain, default value, and wizard section. The Wizard Controller
//! uses it for rendering and coercion; tests use it for boundary generation.

use serde::{Deserialize, Serialize};

/// Identifier for one of the thirteen clinical fields.
///
/// Variant order is the wire/feature order expected by the prediction
/// service and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Age,
    Sex,
    ChestPainType,
    RestingBloodPressure,
    Cholesterol,
    FastingBloodSugar,
    RestingEcg,
    MaxHeartRate,
    ExerciseAngina,
    StDepression,
    StSlope,
    VesselCount,
    Thalassemia,
}

impl FieldId {
    /// All fields in wire order.
    pub const ALL: [FieldId; 13] = [
        FieldId::Age,
        FieldId::Sex,
        FieldId::ChestPainType,
        FieldId::RestingBloodPressure,
        FieldId::Cholesterol,
        FieldId::FastingBloodSugar,
        FieldId::RestingEcg,
        FieldId::MaxHeartRate,
        FieldId::ExerciseAngina,
        FieldId::StDepression,
        FieldId::StSlope,
        FieldId::VesselCount,
        FieldId::Thalassemia,
    ];

    /// Wire name used in the JSON request body.
    pub fn wire_name(&self) -> &'static str {
        self.spec().wire_name
    }

    /// Resolve a wire name (e.g. `"trestbps"`) back to a field id.
    pub fn from_wire(name: &str) -> Option<FieldId> {
        FieldId::ALL
            .into_iter()
            .find(|id| id.wire_name() == name)
    }

    /// The full registry entry for this field.
    pub fn spec(&self) -> &'static FieldSpec {
        field_spec(*self)
    }
}

/// The declared numeric domain of a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldDomain {
    /// Integral scalar within an inclusive range.
    Integer { min: i64, max: i64 },
    /// Real scalar with one-decimal granularity.
    Decimal { min: f64, max: f64 },
    /// Binary yes/no flag encoded 0/1.
    Flag { yes: &'static str, no: &'static str },
    /// Enumerated category; value `i` selects `labels[i]`.
    Category { labels: &'static [&'static str] },
}

impl FieldDomain {
    /// Whether the field is a binary flag.
    ///
    /// Flags always count as "filled" for completion purposes, since both
    /// of their values are meaningful answers.
    pub fn is_flag(&self) -> bool {
        matches!(self, FieldDomain::Flag { .. })
    }

    /// Largest value the domain admits.
    pub fn max_value(&self) -> f64 {
        match self {
            FieldDomain::Integer { max, .. } => *max as f64,
            FieldDomain::Decimal { max, .. } => *max,
            FieldDomain::Flag { .. } => 1.0,
            FieldDomain::Category { labels } => (labels.len() - 1) as f64,
        }
    }

    /// Smallest value the domain admits.
    pub fn min_value(&self) -> f64 {
        match self {
            FieldDomain::Integer { min, .. } => *min as f64,
            FieldDomain::Decimal { min, .. } => *min,
            FieldDomain::Flag { .. } | FieldDomain::Category { .. } => 0.0,
        }
    }

    /// Display label for a stored value, for select-style domains.
    pub fn option_label(&self, value: f64) -> Option<&'static str> {
        let index = value as usize;
        match self {
            FieldDomain::Flag { yes, no } => match index {
                0 => Some(no),
                1 => Some(yes),
                _ => None,
            },
            FieldDomain::Category { labels } => labels.get(index).copied(),
            _ => None,
        }
    }
}

/// Which wizard section a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Demographics,
    Vitals,
    Tests,
}

impl Section {
    /// Sections in wizard order.
    pub const ALL: [Section; 3] = [Section::Demographics, Section::Vitals, Section::Tests];

    /// Short label for the section tab.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Demographics => "Demographics",
            Section::Vitals => "Vitals",
            Section::Tests => "Tests",
        }
    }

    /// The section after this one, if any.
    pub fn next(&self) -> Option<Section> {
        match self {
            Section::Demographics => Some(Section::Vitals),
            Section::Vitals => Some(Section::Tests),
            Section::Tests => None,
        }
    }

    /// The section before this one, if any.
    pub fn prev(&self) -> Option<Section> {
        match self {
            Section::Demographics => None,
            Section::Vitals => Some(Section::Demographics),
            Section::Tests => Some(Section::Vitals),
        }
    }

    /// Whether this is the last section (the only one submission is offered from).
    pub fn is_final(&self) -> bool {
        self.next().is_none()
    }
}

/// Registry entry for a single clinical field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub id: FieldId,
    /// JSON field name on the wire.
    pub wire_name: &'static str,
    /// Human-readable label, unit included where applicable.
    pub label: &'static str,
    pub section: Section,
    pub domain: FieldDomain,
    pub default: f64,
}

/// The full registry, in wire order.
static FIELDS: [FieldSpec; 13] = [
    FieldSpec {
        id: FieldId::Age,
        wire_name: "age",
        label: "Age",
        section: Section::Demographics,
        domain: FieldDomain::Integer { min: 20, max: 100 },
        default: 50.0,
    },
    FieldSpec {
        id: FieldId::Sex,
        wire_name: "sex",
        label: "Sex",
        section: Section::Demographics,
        domain: FieldDomain::Flag {
            yes: "Male",
            no: "Female",
        },
        default: 1.0,
    },
    FieldSpec {
        id: FieldId::ChestPainType,
        wire_name: "cp",
        label: "Chest Pain Type",
        section: Section::Demographics,
        domain: FieldDomain::Category {
            labels: &[
                "Typical Angina",
                "Atypical Angina",
                "Non-anginal Pain",
                "Asymptomatic",
            ],
        },
        default: 0.0,
    },
    FieldSpec {
        id: FieldId::RestingBloodPressure,
        wire_name: "trestbps",
        label: "Resting Blood Pressure (mm Hg)",
        section: Section::Vitals,
        domain: FieldDomain::Integer { min: 80, max: 200 },
        default: 120.0,
    },
    FieldSpec {
        id: FieldId::Cholesterol,
        wire_name: "chol",
        label: "Serum Cholesterol (mg/dl)",
        section: Section::Vitals,
        domain: FieldDomain::Integer { min: 100, max: 600 },
        default: 200.0,
    },
    FieldSpec {
        id: FieldId::FastingBloodSugar,
        wire_name: "fbs",
        label: "Fasting Blood Sugar > 120 mg/dl",
        section: Section::Vitals,
        domain: FieldDomain::Flag {
            yes: "Yes",
            no: "No",
        },
        default: 0.0,
    },
    FieldSpec {
        id: FieldId::RestingEcg,
        wire_name: "restecg",
        label: "Resting ECG Results",
        section: Section::Vitals,
        domain: FieldDomain::Category {
            labels: &[
                "Normal",
                "ST-T Wave Abnormality",
                "Left Ventricular Hypertrophy",
            ],
        },
        default: 0.0,
    },
    FieldSpec {
        id: FieldId::MaxHeartRate,
        wire_name: "thalach",
        label: "Maximum Heart Rate",
        section: Section::Vitals,
        domain: FieldDomain::Integer { min: 60, max: 220 },
        default: 150.0,
    },
    FieldSpec {
        id: FieldId::ExerciseAngina,
        wire_name: "exang",
        label: "Exercise Induced Angina",
        section: Section::Tests,
        domain: FieldDomain::Flag {
            yes: "Yes",
            no: "No",
        },
        default: 0.0,
    },
    FieldSpec {
        id: FieldId::StDepression,
        wire_name: "oldpeak",
        label: "ST Depression Induced by Exercise",
        section: Section::Tests,
        domain: FieldDomain::Decimal {
            min: 0.0,
            max: 10.0,
        },
        default: 0.0,
    },
    FieldSpec {
        id: FieldId::StSlope,
        wire_name: "slope",
        label: "Slope of Peak Exercise ST Segment",
        section: Section::Tests,
        domain: FieldDomain::Category {
            labels: &["Upsloping", "Flat", "Downsloping"],
        },
        default: 0.0,
    },
    FieldSpec {
        id: FieldId::VesselCount,
        wire_name: "ca",
        label: "Number of Major Vessels Colored by Fluoroscopy",
        section: Section::Tests,
        domain: FieldDomain::Category {
            labels: &["0", "1", "2", "3"],
        },
        default: 0.0,
    },
    FieldSpec {
        id: FieldId::Thalassemia,
        wire_name: "thal",
        label: "Thalassemia",
        section: Section::Tests,
        domain: FieldDomain::Category {
            labels: &["Normal", "Fixed Defect", "Reversible Defect"],
        },
        default: 0.0,
    },
];

/// All field specs in wire order.
pub fn fields() -> &'static [FieldSpec; 13] {
    &FIELDS
}

/// Registry entry for a single field.
pub fn field_spec(id: FieldId) -> &'static FieldSpec {
    // FIELDS is declared in FieldId::ALL order
    &FIELDS[FieldId::ALL.iter().position(|f| *f == id).unwrap_or(0)]
}

/// Fields belonging to a wizard section, in display order.
pub fn fields_in(section: Section) -> impl Iterator<Item = &'static FieldSpec> {
    FIELDS.iter().filter(move |f| f.section == section)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_thirteen_fields() {
        assert_eq!(fields().len(), 13);
        assert_eq!(FieldId::ALL.len(), 13);
    }

    #[test]
    fn test_spec_matches_id() {
        for id in FieldId::ALL {
            assert_eq!(field_spec(id).id, id);
        }
    }

    #[test]
    fn test_wire_names_unique() {
        let mut names: Vec<_> = fields().iter().map(|f| f.wire_name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 13);
    }

    #[test]
    fn test_from_wire_roundtrip() {
        for id in FieldId::ALL {
            assert_eq!(FieldId::from_wire(id.wire_name()), Some(id));
        }
        assert_eq!(FieldId::from_wire("bmi"), None);
    }

    #[test]
    fn test_sections_partition_fields() {
        let total: usize = Section::ALL
            .iter()
            .map(|s| fields_in(*s).count())
            .sum();
        assert_eq!(total, 13);
        assert_eq!(fields_in(Section::Demographics).count(), 3);
        assert_eq!(fields_in(Section::Vitals).count(), 5);
        assert_eq!(fields_in(Section::Tests).count(), 5);
    }

    #[test]
    fn test_defaults_within_domain() {
        for spec in fields() {
            assert!(
                spec.default >= spec.domain.min_value()
                    && spec.default <= spec.domain.max_value(),
                "default out of domain for {}",
                spec.wire_name
            );
        }
    }

    #[test]
    fn test_section_order() {
        assert_eq!(Section::Demographics.next(), Some(Section::Vitals));
        assert_eq!(Section::Vitals.next(), Some(Section::Tests));
        assert_eq!(Section::Tests.next(), None);
        assert!(Section::Tests.is_final());
        assert_eq!(Section::Demographics.prev(), None);
    }

    #[test]
    fn test_option_labels() {
        let sex = field_spec(FieldId::Sex);
        assert_eq!(sex.domain.option_label(1.0), Some("Male"));
        assert_eq!(sex.domain.option_label(0.0), Some("Female"));

        let cp = field_spec(FieldId::ChestPainType);
        assert_eq!(cp.domain.option_label(3.0), Some("Asymptomatic"));
        assert_eq!(cp.domain.option_label(4.0), None);

        let age = field_spec(FieldId::Age);
        assert_eq!(age.domain.option_label(50.0), None);
    }
}
