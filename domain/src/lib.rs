//! Domain layer for cardio-quorum
//!
//! This crate contains the clinical record schema and the consensus result
//! types. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Field Registry
//!
//! The prediction service scores exactly thirteen clinical measurements.
//! Their wire names, numeric domains, defaults, and wizard section
//! assignments are fixed data, declared once in [`record::registry`] and
//! consumed by every other layer.
//!
//! ## Consensus
//!
//! The service runs several models over the same record and returns one
//! [`ModelPrediction`] per model plus an aggregated consensus verdict.
//! Nothing in this crate computes predictions; it only gives the response
//! a typed, ordered shape.

pub mod consensus;
pub mod core;
pub mod record;

// Re-export commonly used types
pub use consensus::{
    prediction::{ConsensusResult, ModelPrediction},
    risk::RiskCategory,
};
pub use core::error::DomainError;
pub use record::{
    ClinicalRecord,
    registry::{FieldDomain, FieldId, FieldSpec, Section, field_spec, fields, fields_in},
};
