//! Application layer for cardio-quorum
//!
//! This crate contains the submission use case, the gateway port, and the
//! request lifecycle state machine. It depends only on the domain layer.

pub mod lifecycle;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use lifecycle::RequestLifecycle;
pub use ports::prediction_gateway::{GatewayError, PredictionGateway};
pub use use_cases::submit_assessment::SubmitAssessment;
