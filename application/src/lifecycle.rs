//! Request lifecycle — the state machine behind the submit button.

use crate::ports::prediction_gateway::GatewayError;
use cardio_domain::ConsensusResult;

/// State of the one-and-only outstanding prediction request.
///
/// Exactly one state is active at a time. Legal transitions:
///
/// ```text
/// Idle ──begin──> Pending ──complete(Ok)───> Succeeded
///                        └─complete(Err)──> Failed
/// Succeeded/Failed ──begin──> Pending   (resubmission)
/// ```
///
/// `begin` while Pending is refused, which is the re-entrancy guard that
/// keeps it to one network call per user-initiated submit cycle.
#[derive(Debug, Clone, Default)]
pub enum RequestLifecycle {
    #[default]
    Idle,
    Pending,
    Succeeded(ConsensusResult),
    Failed(String),
}

impl RequestLifecycle {
    pub fn is_idle(&self) -> bool {
        matches!(self, RequestLifecycle::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RequestLifecycle::Pending)
    }

    /// Whether a result (success or failure) is currently held.
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            RequestLifecycle::Succeeded(_) | RequestLifecycle::Failed(_)
        )
    }

    /// The successful result, if any.
    pub fn result(&self) -> Option<&ConsensusResult> {
        match self {
            RequestLifecycle::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    /// The failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            RequestLifecycle::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Try to move into Pending. Returns false (state unchanged) if a
    /// submission is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = RequestLifecycle::Pending;
        true
    }

    /// Settle a Pending request with the gateway outcome.
    ///
    /// Ignored unless currently Pending; completions cannot clobber a
    /// state they do not own.
    pub fn complete(&mut self, outcome: Result<ConsensusResult, GatewayError>) {
        if !self.is_pending() {
            return;
        }
        *self = match outcome {
            Ok(result) => RequestLifecycle::Succeeded(result),
            Err(error) => RequestLifecycle::Failed(error.user_message()),
        };
    }
}
