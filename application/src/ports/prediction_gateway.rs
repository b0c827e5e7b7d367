//! Prediction gateway port
//!
//! Defines the interface for talking to the remote multi-model prediction
//! service. The HTTP implementation lives in the infrastructure layer.

use async_trait::async_trait;
use cardio_domain::{ClinicalRecord, ConsensusResult};
use thiserror::Error;

/// Errors that can occur while talking to the prediction service
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The service answered with a non-2xx status.
    #[error("Prediction service returned HTTP {0}")]
    Http(u16),

    /// The request never completed (connection refused, timeout, DNS, ...).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered 2xx but the body did not match the contract.
    #[error("Invalid response body: {0}")]
    InvalidResponse(String),
}

impl GatewayError {
    /// Human-readable message for the Failed lifecycle state.
    ///
    /// Always non-empty: an error that carries no message of its own gets
    /// a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Transport(msg) | GatewayError::InvalidResponse(msg)
                if msg.trim().is_empty() =>
            {
                "The prediction request failed for an unknown reason".to_string()
            }
            _ => self.to_string(),
        }
    }
}

/// Gateway to the prediction service
///
/// One submission at a time: callers guard re-entrancy through
/// [`crate::RequestLifecycle`], not here.
#[async_trait]
pub trait PredictionGateway: Send + Sync {
    /// Submit a record to every model and receive the consensus response.
    async fn predict_all(&self, record: &ClinicalRecord)
    -> Result<ConsensusResult, GatewayError>;

    /// List the model names the service currently serves.
    async fn available_models(&self) -> Result<Vec<String>, GatewayError>;

    /// Cheap liveness probe.
    async fn health(&self) -> Result<(), GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_embeds_status_code() {
        let error = GatewayError::Http(500);
        assert!(error.to_string().contains("500"));
        assert!(error.user_message().contains("500"));
    }

    #[test]
    fn test_transport_error_keeps_underlying_message() {
        let error = GatewayError::Transport("connection refused".into());
        assert!(error.user_message().contains("connection refused"));
    }

    #[test]
    fn test_empty_message_gets_fallback() {
        let error = GatewayError::Transport(String::new());
        assert_eq!(
            error.user_message(),
            "The prediction request failed for an unknown reason"
        );
    }
}
