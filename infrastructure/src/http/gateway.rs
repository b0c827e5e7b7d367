//! reqwest implementation of the prediction gateway port.
//!
//! Wire contract:
//! - `POST {base_url}/predict_all` — JSON body is the 13-field record,
//!   2xx body is the consensus response.
//! - `GET {base_url}/models` — `{"available_models": [...]}`.
//! - `GET {base_url}/health` — liveness probe, body ignored.
//!
//! Mapping: non-2xx → `GatewayError::Http(status)`; failed transport →
//! `GatewayError::Transport`; undecodable 2xx body →
//! `GatewayError::InvalidResponse`. No structured error body is assumed.

use async_trait::async_trait;
use cardio_application::{GatewayError, PredictionGateway};
use cardio_domain::{ClinicalRecord, ConsensusResult};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// HTTP client for the multi-model prediction service.
pub struct HttpPredictionGateway {
    client: reqwest::Client,
    base_url: String,
}

/// Body of `GET /models`.
#[derive(Debug, Deserialize)]
struct ModelCatalog {
    available_models: Vec<String>,
}

impl HttpPredictionGateway {
    /// Build a gateway against `base_url` with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Check the status and surface non-2xx as `Http(status)`.
    fn ensure_success(response: &reqwest::Response) -> Result<(), GatewayError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(GatewayError::Http(status.as_u16()))
        }
    }
}

#[async_trait]
impl PredictionGateway for HttpPredictionGateway {
    async fn predict_all(
        &self,
        record: &ClinicalRecord,
    ) -> Result<ConsensusResult, GatewayError> {
        let url = self.endpoint("predict_all");
        debug!(%url, "POST clinical record");

        let response = self
            .client
            .post(&url)
            .json(record)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Self::ensure_success(&response)?;

        response
            .json::<ConsensusResult>()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))
    }

    async fn available_models(&self) -> Result<Vec<String>, GatewayError> {
        let response = self
            .client
            .get(self.endpoint("models"))
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Self::ensure_success(&response)?;

        let catalog = response
            .json::<ModelCatalog>()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;
        Ok(catalog.available_models)
    }

    async fn health(&self) -> Result<(), GatewayError> {
        let response = self
            .client
            .get(self.endpoint("health"))
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Self::ensure_success(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway(base: &str) -> HttpPredictionGateway {
        HttpPredictionGateway::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoint_joins_cleanly() {
        assert_eq!(
            gateway("http://localhost:8000").endpoint("predict_all"),
            "http://localhost:8000/predict_all"
        );
        // Trailing slash must not double up
        assert_eq!(
            gateway("http://localhost:8000/").endpoint("health"),
            "http://localhost:8000/health"
        );
    }

    #[test]
    fn test_model_catalog_shape() {
        let catalog: ModelCatalog = serde_json::from_str(
            r#"{"available_models": ["knn_normalized", "random_forest_scaled"]}"#,
        )
        .unwrap();
        assert_eq!(catalog.available_models.len(), 2);
    }

    #[tokio::test]
    async fn test_unreachable_host_maps_to_transport_error() {
        // Port 1 on localhost is assumed closed; error must carry a message.
        let gateway = gateway("http://127.0.0.1:1");
        let error = gateway
            .predict_all(&ClinicalRecord::default())
            .await
            .unwrap_err();
        match error {
            GatewayError::Transport(message) => assert!(!message.is_empty()),
            other => panic!("expected Transport error, got {other:?}"),
        }
    }
}
