//! Redis pub/sub client for multi-node deployments.

#[cfg(feature = "redis-pubsub")]
pub mod implementation {
    use async_trait::async_trait;
    use futures::StreamExt;
    use redis::aio::ConnectionManager;
    use tokio::sync::mpsc;
    use tracing::{debug, warn};

    use crate::client::{MessagingClient, RawMessage, Subscription};
    use crate::error::ClientError;

    /// Redis-backed messaging client.
    #[derive(Clone)]
    pub struct RedisClient {
        client: redis::Client,
        connection: ConnectionManager,
        buffer_size: usize,
    }

    impl std::fmt::Debug for RedisClient {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("RedisClient")
                .field("buffer_size", &self.buffer_size)
                .finish()
        }
    }

    impl RedisClient {
        /// Opens a managed connection to `url`.
        pub async fn connect(url: &str, buffer_size: usize) -> Result<Self, ClientError> {
            let client = redis::Client::open(url)
                .map_err(|e| ClientError::Transport(format!("Redis connection failed: {e}")))?;

            let connection = ConnectionManager::new(client.clone())
                .await
                .map_err(|e| ClientError::Transport(format!("Redis connection failed: {e}")))?;

            Ok(Self {
                client,
                connection,
                buffer_size: buffer_size.max(1),
            })
        }
    }

    #[async_trait]
    impl MessagingClient for RedisClient {
        async fn publish(&self, subject: &str, message: String) -> Result<(), ClientError> {
            let mut conn = self.connection.clone();

            let receivers = redis::cmd("PUBLISH")
                .arg(subject)
                .arg(message)
                .query_async::<i64>(&mut conn)
                .await
                .map_err(|e| ClientError::Transport(format!("Redis PUBLISH failed: {e}")))?;

            debug!(subject, receivers, "Published to Redis");
            Ok(())
        }

        async fn subscribe(&self, subject: &str) -> Result<Subscription, ClientError> {
            let mut pubsub = self
                .client
                .get_async_pubsub()
                .await
                .map_err(|e| ClientError::Transport(format!("Redis connection failed: {e}")))?;

            pubsub
                .subscribe(subject)
                .await
                .map_err(|e| ClientError::Transport(format!("Redis SUBSCRIBE failed: {e}")))?;

            let (tx, rx) = mpsc::channel(self.buffer_size);
            let forwarder = tokio::spawn(async move {
                let mut stream = pubsub.into_on_message();
                while let Some(msg) = stream.next().await {
                    let payload: String = match msg.get_payload() {
                        Ok(payload) => payload,
                        Err(e) => {
                            warn!(error = %e, "Dropping non-UTF-8 Redis message");
                            continue;
                        }
                    };
                    let message = RawMessage {
                        subject: msg.get_channel_name().to_string(),
                        payload,
                    };
                    if tx.send(message).await.is_err() {
                        break;
                    }
                }
            });

            Ok(Subscription::new(subject, rx, forwarder))
        }
    }
}

#[cfg(not(feature = "redis-pubsub"))]
pub mod implementation {
    use async_trait::async_trait;

    use crate::client::{MessagingClient, Subscription};
    use crate::error::ClientError;

    /// Stub Redis client when the `redis-pubsub` feature is disabled.
    #[derive(Debug, Clone)]
    pub struct RedisClient;

    impl RedisClient {
        /// Always fails: the backend is not compiled in.
        pub async fn connect(_url: &str, _buffer_size: usize) -> Result<Self, ClientError> {
            Err(ClientError::Unsupported(
                "redis (enable the `redis-pubsub` feature)".to_string(),
            ))
        }
    }

    #[async_trait]
    impl MessagingClient for RedisClient {
        async fn publish(&self, _subject: &str, _message: String) -> Result<(), ClientError> {
            Err(ClientError::NotConnected)
        }

        async fn subscribe(&self, _subject: &str) -> Result<Subscription, ClientError> {
            Err(ClientError::NotConnected)
        }
    }
}

pub use implementation::RedisClient;
