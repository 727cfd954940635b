//! The messaging client capability and its implementations.
//!
//! The client handle is owned by the hosting service and injected into
//! publishers as `Arc<dyn MessagingClient>`; nothing here keeps a global
//! connection.

pub mod memory;
pub mod redis_pubsub;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use moon_core::config::{MessagingBackend, MessagingConfig};
use moon_events::{Event, EventError};

use crate::error::ClientError;

pub use self::memory::MemoryClient;
pub use self::redis_pubsub::RedisClient;

/// A message as it travels on the bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    /// Subject the message was published on.
    pub subject: String,
    /// JSON payload.
    pub payload: String,
}

/// Publish/subscribe surface of a bus client.
#[async_trait]
pub trait MessagingClient: Send + Sync {
    /// Publishes `message` on `subject`, resolving once the client reports
    /// the outcome.
    async fn publish(&self, subject: &str, message: String) -> Result<(), ClientError>;

    /// Opens a subscription to `subject`.
    async fn subscribe(&self, subject: &str) -> Result<Subscription, ClientError>;
}

/// A live subscription to one subject.
///
/// Messages are forwarded by a background task; closing or dropping the
/// subscription stops it.
#[derive(Debug)]
pub struct Subscription {
    subject: String,
    receiver: mpsc::Receiver<RawMessage>,
    forwarder: JoinHandle<()>,
}

impl Subscription {
    /// Wraps a receiver fed by `forwarder`.
    pub fn new(
        subject: impl Into<String>,
        receiver: mpsc::Receiver<RawMessage>,
        forwarder: JoinHandle<()>,
    ) -> Self {
        Self {
            subject: subject.into(),
            receiver,
            forwarder,
        }
    }

    /// The subscribed subject.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Waits for the next raw message. `None` once the source is gone.
    pub async fn next(&mut self) -> Option<RawMessage> {
        self.receiver.recv().await
    }

    /// Waits for the next message and decodes it against the registry.
    pub async fn next_event(&mut self) -> Option<Result<Event, EventError>> {
        let message = self.next().await?;
        Some(Event::decode(&message.subject, &message.payload))
    }

    /// Stops receiving.
    pub fn close(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.forwarder.abort();
    }
}

/// Builds the client selected by `config.backend`.
pub async fn connect(config: &MessagingConfig) -> Result<Arc<dyn MessagingClient>, ClientError> {
    match config.backend {
        MessagingBackend::Memory => {
            tracing::info!("Using in-memory messaging client");
            Ok(Arc::new(MemoryClient::new(config.channel_buffer_size)))
        }
        MessagingBackend::Redis => {
            let client = RedisClient::connect(&config.url, config.channel_buffer_size).await?;
            tracing::info!(url = %config.url, "Connected Redis messaging client");
            Ok(Arc::new(client))
        }
    }
}
