//! Clinical record — the 13-field measurement set sent to the service.

pub mod registry;

use registry::FieldId;
use serde::{Deserialize, Serialize};

/// One complete set of clinical measurements.
///
/// Every field always holds a value; a fresh record starts from the
/// registry defaults. "Completion" is a derived view over the values
/// ([`ClinicalRecord::filled_count`]), not a nullable state.
///
/// Field names match the service wire contract exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalRecord {
    pub age: f64,
    pub sex: u8,
    pub cp: u8,
    pub trestbps: f64,
    pub chol: f64,
    pub fbs: u8,
    pub restecg: u8,
    pub thalach: f64,
    pub exang: u8,
    pub oldpeak: f64,
    pub slope: u8,
    pub ca: u8,
    pub thal: u8,
}

impl Default for ClinicalRecord {
    fn default() -> Self {
        let mut record = Self {
            age: 0.0,
            sex: 0,
            cp: 0,
            trestbps: 0.0,
            chol: 0.0,
            fbs: 0,
            restecg: 0,
            thalach: 0.0,
            exang: 0,
            oldpeak: 0.0,
            slope: 0,
            ca: 0,
            thal: 0,
        };
        for spec in registry::fields() {
            record.set_value(spec.id, spec.default);
        }
        record
    }
}

impl ClinicalRecord {
    /// Read a field as a plain number.
    pub fn value(&self, id: FieldId) -> f64 {
        match id {
            FieldId::Age => self.age,
            FieldId::Sex => self.sex as f64,
            FieldId::ChestPainType => self.cp as f64,
            FieldId::RestingBloodPressure => self.trestbps,
            FieldId::Cholesterol => self.chol,
            FieldId::FastingBloodSugar => self.fbs as f64,
            FieldId::RestingEcg => self.restecg as f64,
            FieldId::MaxHeartRate => self.thalach,
            FieldId::ExerciseAngina => self.exang as f64,
            FieldId::StDepression => self.oldpeak,
            FieldId::StSlope => self.slope as f64,
            FieldId::VesselCount => self.ca as f64,
            FieldId::Thalassemia => self.thal as f64,
        }
    }

    /// Store a value into a field.
    ///
    /// Flag and category fields are clamped into their enumerated range so
    /// the u8 storage can never hold an out-of-domain selection. Scalar
    /// ranges are advisory and not clamped here.
    pub fn set_value(&mut self, id: FieldId, value: f64) {
        let domain = id.spec().domain;
        let selection = |v: f64| -> u8 {
            v.clamp(domain.min_value(), domain.max_value()) as u8
        };
        match id {
            FieldId::Age => self.age = value,
            FieldId::Sex => self.sex = selection(value),
            FieldId::ChestPainType => self.cp = selection(value),
            FieldId::RestingBloodPressure => self.trestbps = value,
            FieldId::Cholesterol => self.chol = value,
            FieldId::FastingBloodSugar => self.fbs = selection(value),
            FieldId::RestingEcg => self.restecg = selection(value),
            FieldId::MaxHeartRate => self.thalach = value,
            FieldId::ExerciseAngina => self.exang = selection(value),
            FieldId::StDepression => self.oldpeak = value,
            FieldId::StSlope => self.slope = selection(value),
            FieldId::VesselCount => self.ca = selection(value),
            FieldId::Thalassemia => self.thal = selection(value),
        }
    }

    /// Whether a field counts as filled for the completion indicator.
    ///
    /// Flags always count (both 0 and 1 are answers); every other field
    /// counts once its value is non-zero. A legitimately zero category
    /// (e.g. zero major vessels) therefore reads as unfilled — a cosmetic
    /// inaccuracy of the progress view, never a validation gate.
    pub fn is_filled(&self, id: FieldId) -> bool {
        id.spec().domain.is_flag() || self.value(id) != 0.0
    }

    /// Number of filled fields, out of 13.
    pub fn filled_count(&self) -> usize {
        FieldId::ALL.iter().filter(|id| self.is_filled(**id)).count()
    }
}
