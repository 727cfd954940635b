//! Publisher retry configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Retry settings for business-critical publishers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublisherConfig {
    /// Total publish attempts, including the first one.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Base backoff unit in milliseconds; attempt `n` waits `n * retry_delay_ms`.
    #[serde(default = "default_retry_delay")]
    pub retry_delay_ms: u64,
}

impl PublisherConfig {
    /// Base backoff unit as a [`Duration`].
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            retry_delay_ms: default_retry_delay(),
        }
    }
}

fn default_max_attempts() -> u32 {
    5
}

fn default_retry_delay() -> u64 {
    1000
}
