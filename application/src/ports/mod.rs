//! Ports — interfaces implemented by infrastructure adapters

pub mod prediction_gateway;

pub use prediction_gateway::{GatewayError, PredictionGateway};
