//! Retrying publisher with linear backoff.
//!
//! Used for events whose loss is visible to users (stored excel files,
//! notifications). Each retry is a new, independent publish: no
//! deduplication key is attached, so a publish whose acknowledgement was
//! lost can reach consumers more than once.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{error, info, warn};

use moon_core::config::PublisherConfig;
use moon_events::{EventData, Subject};

use super::base::Publisher;
use crate::client::MessagingClient;
use crate::error::PublishError;

/// Attempt ceiling and backoff unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one. Values below 1 act as 1.
    pub max_attempts: u32,
    /// Base backoff unit; the wait after attempt `n` is `n * retry_delay`.
    pub retry_delay: Duration,
}

impl RetryPolicy {
    /// Attempt ceiling used by the business-critical publishers.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

    /// Policy with explicit values.
    pub const fn new(max_attempts: u32, retry_delay: Duration) -> Self {
        Self {
            max_attempts,
            retry_delay,
        }
    }

    /// Wait before the attempt that follows failed attempt `attempt`.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.retry_delay * attempt
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS, Duration::from_secs(1))
    }
}

impl From<&PublisherConfig> for RetryPolicy {
    fn from(config: &PublisherConfig) -> Self {
        Self::new(config.max_attempts, config.retry_delay())
    }
}

/// Timed suspension used between attempts.
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Suspends the current task for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Publisher that retries failed client calls.
///
/// There is no cancellation token: once started, the loop runs until an
/// attempt succeeds or the ceiling is reached, unless the caller drops the
/// future.
pub struct RetryingPublisher<E, S = TokioSleeper> {
    inner: Publisher<E>,
    policy: RetryPolicy,
    sleeper: S,
}

impl<E: EventData> RetryingPublisher<E, TokioSleeper> {
    /// Binds a retrying publisher using the tokio timer.
    pub fn new(client: Arc<dyn MessagingClient>, policy: RetryPolicy) -> Self {
        Self::with_sleeper(client, policy, TokioSleeper)
    }

    /// Binds a retrying publisher using the configured policy.
    pub fn from_config(client: Arc<dyn MessagingClient>, config: &PublisherConfig) -> Self {
        Self::new(client, RetryPolicy::from(config))
    }
}

impl<E: EventData, S: Sleeper> RetryingPublisher<E, S> {
    /// Binds a retrying publisher with an injected sleeper.
    pub fn with_sleeper(client: Arc<dyn MessagingClient>, policy: RetryPolicy, sleeper: S) -> Self {
        Self {
            inner: Publisher::new(client),
            policy,
            sleeper,
        }
    }

    /// The fixed subject of this publisher.
    pub fn subject(&self) -> Subject {
        E::SUBJECT
    }

    /// The active policy.
    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Publishes `data`, retrying client failures.
    ///
    /// On exhaustion the last attempt's error is returned unchanged.
    /// Serialization failures are returned immediately.
    pub async fn publish(&self, data: &E) -> Result<(), PublishError> {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match self.inner.publish(data).await {
                Ok(()) => {
                    if attempt > 1 {
                        info!(subject = %E::SUBJECT, attempt, "Publish succeeded after retry");
                    }
                    return Ok(());
                }
                Err(err @ PublishError::Serialization { .. }) => return Err(err),
                Err(err) if attempt >= max_attempts => {
                    error!(
                        subject = %E::SUBJECT,
                        attempts = attempt,
                        error = %err,
                        "Publish failed, retries exhausted"
                    );
                    return Err(err);
                }
                Err(err) => {
                    let delay = self.policy.delay_after(attempt);
                    warn!(
                        subject = %E::SUBJECT,
                        attempt,
                        max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "Publish failed, retrying"
                    );
                    self.sleeper.sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

impl<E: EventData, S> fmt::Debug for RetryingPublisher<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryingPublisher")
            .field("subject", &E::SUBJECT)
            .field("policy", &self.policy)
            .finish()
    }
}
