//! Consensus types — per-model predictions and the aggregated verdict.

pub mod prediction;
pub mod risk;

pub use prediction::{ConsensusResult, ModelPrediction};
pub use risk::RiskCategory;
