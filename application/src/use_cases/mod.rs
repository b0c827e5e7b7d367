//! Use cases

pub mod submit_assessment;

pub use submit_assessment::SubmitAssessment;
