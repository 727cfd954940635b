//! Base publisher: one event kind, one subject, one client call per publish.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use moon_events::{EventData, Subject};

use crate::client::MessagingClient;
use crate::error::PublishError;

/// Publishes payloads of type `E` to `E::SUBJECT`.
///
/// Holds no state besides the shared client handle, so one instance can be
/// reused for the lifetime of the connection. The client is responsible for
/// being connected before the first publish.
pub struct Publisher<E> {
    client: Arc<dyn MessagingClient>,
    _event: PhantomData<fn() -> E>,
}

impl<E: EventData> Publisher<E> {
    /// Binds a publisher to a service-owned client.
    pub fn new(client: Arc<dyn MessagingClient>) -> Self {
        Self {
            client,
            _event: PhantomData,
        }
    }

    /// The fixed subject of this publisher.
    pub fn subject(&self) -> Subject {
        E::SUBJECT
    }

    /// Serializes `data` and hands it to the client exactly once.
    ///
    /// The client's error, if any, is returned unchanged inside
    /// [`PublishError::Client`].
    pub async fn publish(&self, data: &E) -> Result<(), PublishError> {
        let subject = E::SUBJECT;
        let message = serde_json::to_string(data)
            .map_err(|source| PublishError::Serialization { subject, source })?;

        self.client
            .publish(subject.as_str(), message)
            .await
            .map_err(|source| PublishError::Client { subject, source })?;

        tracing::debug!(subject = %subject, "Event published");
        Ok(())
    }
}

impl<E> Clone for Publisher<E> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            _event: PhantomData,
        }
    }
}

impl<E: EventData> fmt::Debug for Publisher<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Publisher")
            .field("subject", &E::SUBJECT)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use moon_events::BrandCreatedData;

    use super::*;
    use crate::error::ClientError;
    use crate::test_support::ScriptedClient;

    fn brand() -> BrandCreatedData {
        BrandCreatedData {
            id: "b1".into(),
            user_id: "u1".into(),
            name: "Acme".into(),
            code: Some("ACM".into()),
            metadata: Some(serde_json::json!({"origin": "excel"})),
            content_hash: None,
            version: 1,
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_publish_calls_client_once_with_subject_and_json() {
        let client = Arc::new(ScriptedClient::default());
        let publisher = Publisher::<BrandCreatedData>::new(client.clone());

        let data = brand();
        publisher.publish(&data).await.unwrap();

        let calls = client.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "brand:created");
        assert_eq!(calls[0].1, serde_json::to_string(&data).unwrap());
    }

    #[tokio::test]
    async fn test_client_error_is_returned_without_retry() {
        let client = Arc::new(ScriptedClient::new(vec![Err(ClientError::Rejected(
            "stream full".into(),
        ))]));
        let publisher = Publisher::<BrandCreatedData>::new(client.clone());

        let err = publisher.publish(&brand()).await.unwrap_err();

        assert_eq!(
            err.client_error(),
            Some(&ClientError::Rejected("stream full".into()))
        );
        assert_eq!(err.subject(), Subject::BrandCreated);
        assert_eq!(client.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_publisher_is_reusable() {
        let client = Arc::new(ScriptedClient::default());
        let publisher = Publisher::<BrandCreatedData>::new(client.clone());

        publisher.publish(&brand()).await.unwrap();
        publisher.clone().publish(&brand()).await.unwrap();

        assert_eq!(client.calls().len(), 2);
        assert_eq!(publisher.subject(), Subject::BrandCreated);
    }
}
