//! View-models for the results surface.

use super::format::{confidence, display_model_name, format_percent};
use cardio_domain::{ConsensusResult, ModelPrediction, RiskCategory};
use ratatui::style::Color;

/// One row of the per-model table.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRow {
    /// Capitalized model name ("Random Forest").
    pub name: String,
    /// "Heart Disease" or "No Heart Disease".
    pub outcome: &'static str,
    /// Raw probability as "90.0%".
    pub probability: String,
    /// Distance-from-uncertainty as "90.0%".
    pub confidence: String,
    /// Risk string as returned by the service.
    pub risk_level: String,
    /// Whether this model predicted heart disease (drives row color).
    pub positive: bool,
}

impl ModelRow {
    pub fn from_prediction(key: &str, prediction: &ModelPrediction) -> Self {
        let positive = prediction.is_positive();
        Self {
            name: display_model_name(key),
            outcome: if positive {
                "Heart Disease"
            } else {
                "No Heart Disease"
            },
            probability: format_percent(prediction.probability),
            confidence: format_percent(confidence(prediction.probability)),
            risk_level: prediction.risk_level.clone(),
            positive,
        }
    }

    /// Row accent color: red for a positive verdict, green otherwise.
    pub fn color(&self) -> Color {
        if self.positive { Color::Red } else { Color::Green }
    }
}

/// Consensus severity badge.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskBadge {
    pub label: String,
    pub category: RiskCategory,
}

impl RiskBadge {
    /// Build a badge from the service's risk-level string.
    ///
    /// Unrecognized categories keep the raw string and render in the
    /// neutral style — degradation, never an error.
    pub fn from_risk_level(risk_level: &str) -> Self {
        let category = RiskCategory::parse(risk_level);
        let label = category
            .badge_label()
            .map(str::to_string)
            .unwrap_or_else(|| risk_level.to_string());
        Self { label, category }
    }

    pub fn color(&self) -> Color {
        match self.category {
            RiskCategory::High => Color::Red,
            RiskCategory::Medium => Color::Yellow,
            RiskCategory::Low => Color::Green,
            RiskCategory::Unknown => Color::Gray,
        }
    }
}

/// The consensus banner.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsensusView {
    /// "Heart Disease Likely" or "Heart Disease Unlikely".
    pub diagnosis: &'static str,
    pub badge: RiskBadge,
    /// Agreement clamped to [0, 100] — the gauge's display bounds.
    pub agreement: f64,
    /// Agreement as "87.5%".
    pub agreement_label: String,
    pub recommendation: String,
}

/// Everything the results surface renders for one response.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub consensus: ConsensusView,
    /// Per-model rows in the service's response order.
    pub models: Vec<ModelRow>,
}

impl ResultView {
    /// Project a service response into renderable form.
    ///
    /// Pure: the input is only read, and identical inputs always produce
    /// identical views.
    pub fn project(result: &ConsensusResult) -> Self {
        let agreement = result.model_agreement_percentage.clamp(0.0, 100.0);
        Self {
            consensus: ConsensusView {
                diagnosis: if result.is_positive() {
                    "Heart Disease Likely"
                } else {
                    "Heart Disease Unlikely"
                },
                badge: RiskBadge::from_risk_level(&result.consensus_risk_level),
                agreement,
                agreement_label: format!("{agreement:.1}%"),
                recommendation: result.recommendation.clone(),
            },
            models: result
                .predictions
                .iter()
                .map(|(key, prediction)| ModelRow::from_prediction(key, prediction))
                .collect(),
        }
    }
}
