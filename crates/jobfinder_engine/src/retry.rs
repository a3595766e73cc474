use std::time::Duration;

use jobfinder_core::{JobPosting, JobQuery};
use jobfinder_logging::{finder_error, finder_warn};

use crate::{FetchError, JobFetcher};

/// How the wait between attempts grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backoff {
    /// `attempt × base`: 1×, 2×, 3×, ...
    #[default]
    Linear,
    /// `base × 2^(attempt - 1)`: 1×, 2×, 4×, ...
    Exponential,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub backoff: Backoff,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
            backoff: Backoff::Linear,
        }
    }
}

impl RetryPolicy {
    /// Wait after the failed attempt number `attempt` (1-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let attempt = attempt.max(1);
        match self.backoff {
            Backoff::Linear => self.base_delay.saturating_mul(attempt),
            Backoff::Exponential => {
                let factor = 2u32.checked_pow(attempt - 1).unwrap_or(u32::MAX);
                self.base_delay.saturating_mul(factor)
            }
        }
    }
}

/// Runs `fetch_page` until it succeeds or the policy's attempts are used up.
/// The last error is returned unchanged.
pub async fn fetch_with_retry(
    fetcher: &dyn JobFetcher,
    query: &JobQuery,
    policy: &RetryPolicy,
) -> Result<Vec<JobPosting>, FetchError> {
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match fetcher.fetch_page(query).await {
            Ok(jobs) => return Ok(jobs),
            Err(err) if attempt < max_attempts && err.is_retryable() => {
                let delay = policy.delay_for(attempt);
                finder_warn!(
                    "Attempt {}/{} failed ({}: {}), retrying in {:?}",
                    attempt,
                    max_attempts,
                    err.kind,
                    err,
                    delay
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => {
                finder_error!("Fetching jobs failed after {} attempt(s): {}", attempt, err);
                return Err(err);
            }
        }
    }
}
