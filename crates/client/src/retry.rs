//! Bounded retry with linear backoff.
//!
//! Used only for bulk saves: those carry seeding and migration batches, so
//! a transient blip should not lose the whole write. Reads and
//! single-record writes stay single-shot; retrying those is the caller's
//! call.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tracing::warn;

/// Retry budget for a fallible operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Additional attempts allowed after the first failure.
    pub max_retries: u32,
    /// Base delay; the wait after failed attempt `n` is `base_delay * n`.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    /// Total tries this policy allows.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_retries + 1
    }

    /// Delay before the attempt that follows failed attempt `attempt` (1-based).
    #[must_use]
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(attempt)
    }

    /// Run `operation` until it succeeds or the budget is spent, sleeping
    /// [`Self::delay_for_attempt`] between tries. Returns the last error
    /// once every attempt has failed. There is no cancellation: a retry
    /// sequence runs to completion or exhaustion.
    pub async fn run<T, E, F, Fut>(&self, mut operation: F) -> Result<T, E>
    where
        E: Display,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut attempt = 1;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(err) if attempt <= self.max_retries => {
                    let delay = self.delay_for_attempt(attempt);
                    warn!(attempt, ?delay, error = %err, "attempt failed, backing off");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
