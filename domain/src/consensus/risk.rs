//! Risk level categories

use serde::{Deserialize, Serialize};

/// Categorical severity attached to a prediction.
///
/// The service returns free-form strings (e.g. "High risk of heart
/// disease"), so parsing is a case-insensitive keyword match. Anything
/// unrecognized degrades to [`RiskCategory::Unknown`] and renders with a
/// neutral style — never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskCategory {
    High,
    Medium,
    Low,
    Unknown,
}

impl RiskCategory {
    /// Classify a risk-level string from the service.
    pub fn parse(label: &str) -> Self {
        let lower = label.to_ascii_lowercase();
        if lower.contains("high") {
            RiskCategory::High
        } else if lower.contains("medium") || lower.contains("moderate") {
            RiskCategory::Medium
        } else if lower.contains("low") {
            RiskCategory::Low
        } else {
            RiskCategory::Unknown
        }
    }

    /// Badge text for the category; `Unknown` has no canonical text and
    /// callers fall back to the raw service string.
    pub fn badge_label(&self) -> Option<&'static str> {
        match self {
            RiskCategory::High => Some("High Risk"),
            RiskCategory::Medium => Some("Medium Risk"),
            RiskCategory::Low => Some("Low Risk"),
            RiskCategory::Unknown => None,
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskCategory::High => write!(f, "High"),
            RiskCategory::Medium => write!(f, "Medium"),
            RiskCategory::Low => write!(f, "Low"),
            RiskCategory::Unknown => write!(f, "Unknown"),
        }
    }
}
