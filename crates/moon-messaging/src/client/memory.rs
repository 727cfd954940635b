//! In-memory messaging client for tests and single-node deployments.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::sync::{broadcast, mpsc};

use super::{MessagingClient, RawMessage, Subscription};
use crate::error::ClientError;

/// Broadcast-channel backed client.
///
/// Every subscriber of a subject receives every message published after it
/// subscribed. Publishing to a subject nobody listens on succeeds and the
/// message is discarded.
#[derive(Debug)]
pub struct MemoryClient {
    /// Subject → broadcast sender
    channels: RwLock<HashMap<String, broadcast::Sender<RawMessage>>>,
    /// Buffer size for channels
    buffer_size: usize,
    connected: AtomicBool,
}

impl MemoryClient {
    /// Create a new connected client.
    pub fn new(buffer_size: usize) -> Self {
        Self {
            channels: RwLock::new(HashMap::new()),
            buffer_size: buffer_size.max(1),
            connected: AtomicBool::new(true),
        }
    }

    /// Simulate losing the broker connection.
    pub fn disconnect(&self) {
        self.connected.store(false, Ordering::SeqCst);
    }

    /// Restore the connection.
    pub fn reconnect(&self) {
        self.connected.store(true, Ordering::SeqCst);
    }

    /// Whether publishes currently succeed.
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}

impl Default for MemoryClient {
    fn default() -> Self {
        Self::new(256)
    }
}

#[async_trait]
impl MessagingClient for MemoryClient {
    async fn publish(&self, subject: &str, message: String) -> Result<(), ClientError> {
        if !self.is_connected() {
            return Err(ClientError::NotConnected);
        }

        let channels = self.channels.read().await;
        if let Some(tx) = channels.get(subject) {
            let _ = tx.send(RawMessage {
                subject: subject.to_string(),
                payload: message,
            });
        }
        Ok(())
    }

    async fn subscribe(&self, subject: &str) -> Result<Subscription, ClientError> {
        if !self.is_connected() {
            return Err(ClientError::NotConnected);
        }

        let mut source = {
            let mut channels = self.channels.write().await;
            channels
                .entry(subject.to_string())
                .or_insert_with(|| broadcast::channel(self.buffer_size).0)
                .subscribe()
        };

        let (tx, rx) = mpsc::channel(self.buffer_size);
        let name = subject.to_string();
        let forwarder = tokio::spawn(async move {
            loop {
                match source.recv().await {
                    Ok(message) => {
                        if tx.send(message).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(subject = %name, skipped, "Subscriber lagged, messages dropped");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });

        Ok(Subscription::new(subject, rx, forwarder))
    }
}
