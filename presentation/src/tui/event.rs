//! Events delivered into the TUI loop from outside the terminal.

use cardio_application::GatewayError;
use cardio_domain::ConsensusResult;

/// Application events (non-keyboard).
///
/// The one asynchronous operation is the submission call; its completion
/// or failure comes back as a single event.
#[derive(Debug)]
pub enum AppEvent {
    SubmissionFinished(Result<ConsensusResult, GatewayError>),
}
