//! Infrastructure layer for cardio-quorum
//!
//! This crate contains the HTTP adapter for the prediction service and the
//! configuration file loader.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, ServiceConfig};
pub use http::HttpPredictionGateway;
