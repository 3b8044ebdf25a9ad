//! Recovery decisions for a failed reply attempt.
//!
//! Each attempt ends in an [`AttemptOutcome`]. Only two failures are
//! recoverable, and only while retries remain:
//!
//! | Failure | Recovery |
//! |---------|----------|
//! | rate limit | wait the cooldown, resend unchanged |
//! | context length exceeded | mark the oldest evictable message not-sendable, resend |
//!
//! A context overflow with nothing left to evict is surfaced, since resending
//! the same request cannot succeed.

use crate::config::RetryPolicy;
use crate::ports::llm_gateway::GatewayError;
use profiler_domain::SessionState;
use std::time::Duration;

/// What the session changes before the next attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryAction {
    /// Wait, then resend the same request
    Cooldown(Duration),
    /// The message at this index was marked not-sendable
    Evicted { index: usize },
}

/// Result of evaluating one attempt
#[derive(Debug)]
pub enum AttemptOutcome {
    Success(String),
    Retry(RetryAction),
    /// Not recoverable, or out of retries
    Failed(GatewayError),
}

/// Classify `result` and apply any state change recovery needs.
///
/// `retries_left` is the number of further attempts allowed; at zero every
/// failure is final.
pub fn evaluate_attempt(
    result: Result<String, GatewayError>,
    retries_left: usize,
    policy: &RetryPolicy,
    state: &mut SessionState,
) -> AttemptOutcome {
    let error = match result {
        Ok(reply) => return AttemptOutcome::Success(reply),
        Err(error) => error,
    };

    if retries_left == 0 {
        return AttemptOutcome::Failed(error);
    }

    match error {
        GatewayError::RateLimited(_) => {
            AttemptOutcome::Retry(RetryAction::Cooldown(policy.rate_limit_cooldown))
        }
        GatewayError::ContextLengthExceeded(_) => match state.evict_oldest() {
            Some(index) => AttemptOutcome::Retry(RetryAction::Evicted { index }),
            None => AttemptOutcome::Failed(error),
        },
        other => AttemptOutcome::Failed(other),
    }
}
