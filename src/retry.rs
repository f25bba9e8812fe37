//! Re-runs a unit of work when it fails with a transient storage fault.

use std::time::Duration;

use crate::{Error, cancellation::Cancellation};

/// How many times, and how far apart, a unit of work is retried.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Delay before the first retry, doubled for each further retry.
    pub base_delay: Duration,
    /// Upper bound on any single delay.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 6,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// The delay to wait before retry number `retry` (starting at 1).
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry.saturating_sub(1));

        self.base_delay
            .checked_mul(factor)
            .map_or(self.max_delay, |delay| delay.min(self.max_delay))
    }
}

/// Run `unit_of_work` until it succeeds, fails with a non-transient error,
/// or the retry budget in `policy` is spent.
///
/// Every attempt runs `unit_of_work` in full, so it must not leave side
/// effects behind when it fails. `cancellation` is checked before each
/// attempt and interrupts the delay between attempts.
///
/// # Errors
/// Returns [Error::Cancelled] if cancellation was requested, otherwise the
/// error from the last attempt.
pub async fn execute_with_retry<T, F>(
    policy: &RetryPolicy,
    cancellation: &Cancellation,
    mut unit_of_work: F,
) -> Result<T, Error>
where
    F: FnMut() -> Result<T, Error>,
{
    let mut cancellation = cancellation.clone();
    let mut retry = 0;

    loop {
        if cancellation.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let error = match unit_of_work() {
            Ok(value) => return Ok(value),
            Err(error) => error,
        };

        if !error.is_transient() || retry >= policy.max_retries {
            return Err(error);
        }

        retry += 1;
        let delay = policy.delay_for(retry);
        tracing::warn!(
            "Transient storage fault, retry {retry} of {} in {delay:?}: {error}",
            policy.max_retries
        );

        tokio::select! {
            _ = tokio::time::sleep(delay) => {}
            _ = cancellation.cancelled() => return Err(Error::Cancelled),
        }
    }
}
