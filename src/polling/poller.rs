use super::types::{PollError, PollSettings, PollState};
use crate::api::types::BundleStatus;
use crate::api::ExtractionApi;

use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Timer driver for one bundle's polling session.
pub struct BundlePoller<A: ?Sized> {
    api: Arc<A>,
    interval: Duration,
    max_checks: usize,
    cancel: CancellationToken,
}

impl<A> BundlePoller<A>
where
    A: ExtractionApi + ?Sized,
{
    pub fn new(api: Arc<A>, settings: PollSettings) -> Self {
        Self {
            api,
            interval: settings.interval,
            max_checks: settings.max_checks,
            cancel: CancellationToken::new(),
        }
    }

    /// Handle the caller can use to stop the session. Cancellation is
    /// observed at the top of the next tick.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Poll until the bundle reaches a terminal state, then deliver the
    /// results payload exactly once.
    ///
    /// The first check happens one full interval after the call; checks
    /// never overlap, a slow one pushes the next tick back.
    pub async fn wait_for_results(
        &self,
        project_id: &str,
        bundle_id: &str,
    ) -> Result<serde_json::Value, PollError> {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick of a fresh interval completes immediately; consume
        // it so checks start one interval after bundle creation.
        ticker.tick().await;

        let mut checks = 0usize;

        loop {
            tokio::select! {
                _ = self.cancel.cancelled() => {
                    tracing::warn!("Polling for bundle {} canceled after {} checks", bundle_id, checks);
                    return Err(PollError::Canceled);
                }
                _ = ticker.tick() => {}
            }

            checks += 1;
            let details = self.api.bundle_details(project_id, bundle_id).await?;
            let status = BundleStatus::classify(&details.status);

            match PollState::after_status(&status) {
                PollState::Done => {
                    tracing::info!("Bundle {} finished after {} checks", bundle_id, checks);
                    let results = self.api.bundle_results(project_id, bundle_id).await?;
                    return Ok(results);
                }
                PollState::Failed => {
                    return Err(PollError::Terminated(status));
                }
                PollState::Waiting => {
                    tracing::info!("Bundle {} is not ready, in status: {}", bundle_id, status);
                    if checks >= self.max_checks {
                        return Err(PollError::AttemptsExhausted(checks));
                    }
                }
            }
        }
    }
}
