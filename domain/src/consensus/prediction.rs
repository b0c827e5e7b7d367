//! Service response types for `POST /predict_all`.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One model's verdict on a clinical record.
///
/// Received from the service, never constructed locally except as display
/// defaults in tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPrediction {
    /// Binary outcome: 1 = heart disease predicted, 0 = not.
    pub prediction: u8,
    /// Probability the model assigned to its own verdict, in [0, 1].
    pub probability: f64,
    /// Free-form severity string (e.g. "High risk of heart disease").
    pub risk_level: String,
}

impl ModelPrediction {
    /// Whether this model predicted heart disease.
    pub fn is_positive(&self) -> bool {
        self.prediction == 1
    }
}

/// The aggregated response from the multi-model prediction service.
///
/// Immutable once received: owned by the result view for one display cycle
/// and replaced wholesale by the next submission's response.
///
/// `predictions` is kept as an explicit ordered sequence of
/// `(model name, prediction)` pairs in service response order, so rendering
/// never depends on incidental map iteration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusResult {
    #[serde(
        serialize_with = "serialize_predictions",
        deserialize_with = "deserialize_predictions"
    )]
    pub predictions: Vec<(String, ModelPrediction)>,
    /// Binary consensus outcome across all models.
    pub consensus_prediction: u8,
    /// Severity string for the consensus.
    pub consensus_risk_level: String,
    /// Free-text recommendation from the service.
    pub recommendation: String,
    /// Fraction of models agreeing with the consensus, expressed 0-100.
    pub model_agreement_percentage: f64,
}

impl ConsensusResult {
    /// Whether the consensus is a positive (heart disease) verdict.
    pub fn is_positive(&self) -> bool {
        self.consensus_prediction == 1
    }

    /// Number of individual model predictions.
    pub fn model_count(&self) -> usize {
        self.predictions.len()
    }

    /// Look up a model's prediction by name.
    pub fn prediction_for(&self, model: &str) -> Option<&ModelPrediction> {
        self.predictions
            .iter()
            .find(|(name, _)| name == model)
            .map(|(_, p)| p)
    }
}

fn serialize_predictions<S>(
    predictions: &[(String, ModelPrediction)],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(predictions.len()))?;
    for (name, prediction) in predictions {
        map.serialize_entry(name, prediction)?;
    }
    map.end()
}

/// Deserialize the wire `predictions` object into ordered pairs.
///
/// Streaming through `MapAccess` preserves JSON document order without
/// buffering into an intermediate map.
fn deserialize_predictions<'de, D>(
    deserializer: D,
) -> Result<Vec<(String, ModelPrediction)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OrderedPredictions;

    impl<'de> Visitor<'de> for OrderedPredictions {
        type Value = Vec<(String, ModelPrediction)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of model name to prediction")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some(entry) = access.next_entry::<String, ModelPrediction>()? {
                pairs.push(entry);
            }
            Ok(pairs)
        }
    }

    deserializer.deserialize_map(OrderedPredictions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "predictions": {
                "knn": {"prediction": 0, "probability": 0.35, "risk_level": "Low risk of heart disease"},
                "random_forest": {"prediction": 1, "probability": 0.9, "risk_level": "High risk of heart disease"},
                "logistic_regression": {"prediction": 1, "probability": 0.72, "risk_level": "High risk of heart disease"}
            },
            "consensus_prediction": 1,
            "consensus_risk_level": "High risk of heart disease",
            "recommendation": "Please consult a healthcare professional for a thorough evaluation.",
            "model_agreement_percentage": 66.7
        }"#
    }

    #[test]
    fn test_deserialize_preserves_document_order() {
        let result: ConsensusResult = serde_json::from_str(sample_json()).unwrap();
        let names: Vec<_> = result.predictions.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["knn", "random_forest", "logistic_regression"]);
    }

    #[test]
    fn test_deserialize_fields() {
        let result: ConsensusResult = serde_json::from_str(sample_json()).unwrap();
        assert!(result.is_positive());
        assert_eq!(result.model_count(), 3);
        assert_eq!(result.model_agreement_percentage, 66.7);

        let knn = result.prediction_for("knn").unwrap();
        assert!(!knn.is_positive());
        assert_eq!(knn.probability, 0.35);
        assert!(result.prediction_for("svm").is_none());
    }

    #[test]
    fn test_serialize_predictions_as_object() {
        let result: ConsensusResult = serde_json::from_str(sample_json()).unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert!(value["predictions"].is_object());
        assert_eq!(value["predictions"]["random_forest"]["prediction"], 1);
    }

    #[test]
    fn test_empty_predictions_object() {
        let json = r#"{
            "predictions": {},
            "consensus_prediction": 0,
            "consensus_risk_level": "Low risk of heart disease",
            "recommendation": "Continue maintaining a healthy lifestyle with regular check-ups.",
            "model_agreement_percentage": 0
        }"#;
        let result: ConsensusResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.model_count(), 0);
        assert!(!result.is_positive());
    }
}
