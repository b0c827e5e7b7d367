//! HTTP adapter for the prediction service

pub mod gateway;

pub use gateway::HttpPredictionGateway;
