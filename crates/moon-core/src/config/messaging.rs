//! Message bus connection configuration.

use serde::{Deserialize, Serialize};

/// Which messaging client implementation to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessagingBackend {
    /// In-process broadcast channels (tests, single-node).
    Memory,
    /// Redis pub/sub.
    Redis,
}

/// Message bus settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagingConfig {
    /// Client implementation.
    #[serde(default = "default_backend")]
    pub backend: MessagingBackend,
    /// Broker URL (ignored by the memory backend).
    #[serde(default = "default_url")]
    pub url: String,
    /// Per-subject buffer size for in-process channels and subscriptions.
    #[serde(default = "default_channel_buffer")]
    pub channel_buffer_size: usize,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            url: default_url(),
            channel_buffer_size: default_channel_buffer(),
        }
    }
}

fn default_backend() -> MessagingBackend {
    MessagingBackend::Memory
}

fn default_url() -> String {
    "redis://127.0.0.1:6379".to_string()
}

fn default_channel_buffer() -> usize {
    256
}
