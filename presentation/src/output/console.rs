//! Console output formatter for assessment results

use crate::interpret::ResultView;
use cardio_domain::{ConsensusResult, RiskCategory};
use colored::Colorize;

/// Formats assessment results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete result: consensus banner plus per-model breakdown
    pub fn format(result: &ConsensusResult) -> String {
        let view = ResultView::project(result);
        let mut output = String::new();

        output.push_str(&Self::header("Heart Disease Risk Assessment"));
        output.push('\n');

        output.push_str(&Self::consensus_block(&view));

        output.push_str(&Self::section_header("Model Breakdown"));
        for row in &view.models {
            let title = format!("── {} ──", row.name);
            let title = if row.positive {
                title.red().bold()
            } else {
                title.green().bold()
            };
            output.push_str(&format!(
                "\n{}\n  {} ({} probability, {} confidence)\n  {}\n",
                title, row.outcome, row.probability, row.confidence, row.risk_level
            ));
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(result: &ConsensusResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the consensus verdict only (concise output)
    pub fn format_consensus_only(result: &ConsensusResult) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{}\n\n",
            "=== Assessment Consensus ===".cyan().bold()
        ));
        output.push_str(&Self::consensus_block(&ResultView::project(result)));
        output
    }

    /// Format a failed submission for the console
    pub fn format_error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    fn consensus_block(view: &ResultView) -> String {
        let consensus = &view.consensus;
        let diagnosis = if consensus.diagnosis.contains("Likely") {
            consensus.diagnosis.red().bold()
        } else {
            consensus.diagnosis.green().bold()
        };
        let badge = match RiskCategory::parse(&consensus.badge.label) {
            RiskCategory::High => consensus.badge.label.red().bold(),
            RiskCategory::Medium => consensus.badge.label.yellow().bold(),
            RiskCategory::Low => consensus.badge.label.green().bold(),
            RiskCategory::Unknown => consensus.badge.label.normal(),
        };
        format!(
            "{} {}\n{} {}\n{} {}\n{} {}\n",
            "Consensus:".cyan().bold(),
            diagnosis,
            "Risk level:".cyan().bold(),
            badge,
            "Model agreement:".cyan().bold(),
            consensus.agreement_label,
            "Recommendation:".cyan().bold(),
            consensus.recommendation
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}\n", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ConsensusResult {
        serde_json::from_str(
            r#"{
                "predictions": {
                    "knn": {"prediction": 1, "probability": 0.8, "risk_level": "High risk of heart disease"},
                    "random_forest": {"prediction": 0, "probability": 0.4, "risk_level": "Low risk of heart disease"}
                },
                "consensus_prediction": 1,
                "consensus_risk_level": "High",
                "recommendation": "Please consult a healthcare professional.",
                "model_agreement_percentage": 50.0
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_full_format_lists_every_model() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format(&sample());
        assert!(output.contains("Heart Disease Risk Assessment"));
        assert!(output.contains("── Knn ──"));
        assert!(output.contains("── Random Forest ──"));
        assert!(output.contains("80.0% probability"));
        assert!(output.contains("Please consult a healthcare professional."));
    }

    #[test]
    fn test_consensus_only_skips_model_rows() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_consensus_only(&sample());
        assert!(output.contains("Heart Disease Likely"));
        assert!(output.contains("High Risk"));
        assert!(!output.contains("Random Forest"));
    }

    #[test]
    fn test_json_round_trips_prediction_order() {
        let output = ConsoleFormatter::format_json(&sample());
        let knn = output.find("\"knn\"").unwrap();
        let forest = output.find("\"random_forest\"").unwrap();
        assert!(knn < forest);
    }
}
