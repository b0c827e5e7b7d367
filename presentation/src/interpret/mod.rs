//! Result Interpreter — pure projection from a service response to
//! renderable view-models.
//!
//! No mutation of the input and no side effects: the same
//! `ConsensusResult` always yields the same views, which keeps the whole
//! results surface testable without a terminal or a network.

pub mod format;
pub mod view;

pub use format::{confidence, display_model_name, format_percent};
pub use view::{ConsensusView, ModelRow, ResultView, RiskBadge};
