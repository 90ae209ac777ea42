use crate::api::error::ApiError;
use crate::api::types::BundleStatus;

use std::time::Duration;
use thiserror::Error;

/// State of one polling session.
///
/// A session starts in `Waiting` and ends in exactly one of the two
/// terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    /// Extraction still running; keep checking.
    Waiting,
    /// Terminal success: results were fetched and delivered.
    Done,
    /// Terminal failure: the bundle will never produce results, or polling
    /// was stopped.
    Failed,
}

impl PollState {
    /// State implied by an observed bundle status.
    ///
    /// Unrecognized statuses map to `Waiting`: the service's status set is
    /// not fully published, and guessing a terminal meaning would stop the
    /// session on a bundle that may still finish.
    pub fn after_status(status: &BundleStatus) -> PollState {
        if status.is_success() {
            PollState::Done
        } else if status.is_failure() {
            PollState::Failed
        } else {
            PollState::Waiting
        }
    }
}

/// Tuning knobs for a polling session.
#[derive(Debug, Clone)]
pub struct PollSettings {
    /// Delay between status checks.
    pub interval: Duration,
    /// Give up after this many checks.
    pub max_checks: usize,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(60),
            max_checks: 60,
        }
    }
}

/// Why a polling session ended in `Failed`.
#[derive(Debug, Error)]
pub enum PollError {
    /// The bundle reached a terminal status that will never yield results.
    #[error("bundle reached terminal status {0} without results")]
    Terminated(BundleStatus),

    /// The bundle was still not ready when the check budget ran out.
    #[error("bundle still not ready after {0} status checks")]
    AttemptsExhausted(usize),

    /// The caller canceled the session.
    #[error("polling was canceled")]
    Canceled,

    /// A status or results fetch failed even after the client's bounded
    /// retry.
    #[error(transparent)]
    Api(#[from] ApiError),
}
