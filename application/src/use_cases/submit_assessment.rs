//! Submit assessment use case
//!
//! Packages a completed clinical record, hands it to the gateway, and
//! reports the outcome. The caller owns the [`crate::RequestLifecycle`]
//! and is responsible for refusing a second submission while one is
//! Pending.

use crate::ports::prediction_gateway::{GatewayError, PredictionGateway};
use cardio_domain::{ClinicalRecord, ConsensusResult};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case: submit one record to all models and await consensus.
pub struct SubmitAssessment {
    gateway: Arc<dyn PredictionGateway>,
}

impl SubmitAssessment {
    pub fn new(gateway: Arc<dyn PredictionGateway>) -> Self {
        Self { gateway }
    }

    /// Execute one submission end to end.
    ///
    /// The record is moved in: the wizard's working copy stays behind and
    /// remains editable/resubmittable regardless of the outcome.
    pub async fn execute(
        &self,
        record: ClinicalRecord,
    ) -> Result<ConsensusResult, GatewayError> {
        info!("Submitting clinical record to prediction service");
        debug!(?record, "outgoing record");

        match self.gateway.predict_all(&record).await {
            Ok(result) => {
                info!(
                    models = result.model_count(),
                    agreement = result.model_agreement_percentage,
                    "Received consensus response"
                );
                Ok(result)
            }
            Err(error) => {
                warn!(%error, "Prediction request failed");
                Err(error)
            }
        }
    }

    /// List the models the service would consult.
    pub async fn list_models(&self) -> Result<Vec<String>, GatewayError> {
        self.gateway.available_models().await
    }

    /// Probe the service before opening the wizard.
    pub async fn check_health(&self) -> Result<(), GatewayError> {
        self.gateway.health().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Test double that counts calls and replays a canned outcome.
    struct FakeGateway {
        calls: AtomicUsize,
        fail_status: Option<u16>,
    }

    impl FakeGateway {
        fn succeeding() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_status: None,
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_status: Some(status),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PredictionGateway for FakeGateway {
        async fn predict_all(
            &self,
            _record: &ClinicalRecord,
        ) -> Result<ConsensusResult, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(status) = self.fail_status {
                return Err(GatewayError::Http(status));
            }
            Ok(serde_json::from_str(
                r#"{
                    "predictions": {
                        "knn": {"prediction": 0, "probability": 0.35, "risk_level": "Low risk of heart disease"},
                        "random_forest": {"prediction": 1, "probability": 0.9, "risk_level": "High risk of heart disease"}
                    },
                    "consensus_prediction": 1,
                    "consensus_risk_level": "High risk of heart disease",
                    "recommendation": "Please consult a healthcare professional for a thorough evaluation.",
                    "model_agreement_percentage": 50.0
                }"#,
            )
            .unwrap())
        }

        async fn available_models(&self) -> Result<Vec<String>, GatewayError> {
            Ok(vec!["knn".into(), "random_forest".into()])
        }

        async fn health(&self) -> Result<(), GatewayError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_execute_returns_gateway_result() {
        let gateway = Arc::new(FakeGateway::succeeding());
        let use_case = SubmitAssessment::new(gateway.clone());

        let result = use_case.execute(ClinicalRecord::default()).await.unwrap();
        assert_eq!(result.model_count(), 2);
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn test_execute_propagates_http_failure() {
        let gateway = Arc::new(FakeGateway::failing(500));
        let use_case = SubmitAssessment::new(gateway.clone());

        let error = use_case
            .execute(ClinicalRecord::default())
            .await
            .unwrap_err();
        assert!(error.user_message().contains("500"));
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn test_lifecycle_guard_means_one_call_per_cycle() {
        use crate::lifecycle::RequestLifecycle;

        let gateway = Arc::new(FakeGateway::succeeding());
        let use_case = SubmitAssessment::new(gateway.clone());
        let mut lifecycle = RequestLifecycle::Idle;

        // First submit goes through, second is refused while Pending.
        assert!(lifecycle.begin());
        assert!(!lifecycle.begin());
        let outcome = use_case.execute(ClinicalRecord::default()).await;
        lifecycle.complete(outcome);

        assert_eq!(gateway.call_count(), 1);
        assert!(lifecycle.result().is_some());
    }

    #[tokio::test]
    async fn test_list_models() {
        let use_case = SubmitAssessment::new(Arc::new(FakeGateway::succeeding()));
        let models = use_case.list_models().await.unwrap();
        assert_eq!(models, ["knn", "random_forest"]);
    }
}
