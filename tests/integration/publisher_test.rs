//! Integration tests for publishing through a messaging client.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::json;

use moon_lib::config::{MessagingConfig, PublisherConfig};
use moon_lib::events::{BrandUpdatedData, Event, ExcelFileStoredData, Subject};
use moon_lib::messaging::client::MemoryClient;
use moon_lib::messaging::{
    BrandUpdatedPublisher, ClientError, ExcelFileStoredPublisher, MessagingClient, RetryPolicy,
    RetryingPublisher, Sleeper, Subscription,
};
use moon_lib::types::ExcelOperation;
use moon_lib::utils::{
    ContentFields, content_hash, excel_file_name, excel_object_key, expiration_date_from,
};
use moon_lib::{AppError, ErrorKind};

/// Fails the first `failures` publishes, then delegates.
struct FlakyClient {
    inner: MemoryClient,
    failures: u32,
    calls: AtomicU32,
}

#[async_trait]
impl MessagingClient for FlakyClient {
    async fn publish(&self, subject: &str, message: String) -> Result<(), ClientError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call <= self.failures {
            return Err(ClientError::Transport(format!("flaky #{call}")));
        }
        self.inner.publish(subject, message).await
    }

    async fn subscribe(&self, subject: &str) -> Result<Subscription, ClientError> {
        self.inner.subscribe(subject).await
    }
}

#[derive(Default)]
struct NoSleep {
    delays: Mutex<Vec<Duration>>,
}

#[async_trait]
impl Sleeper for NoSleep {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}

fn stored_file() -> ExcelFileStoredData {
    let at = Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap();
    ExcelFileStoredData {
        job_id: "job-7".into(),
        user_id: "u2".into(),
        parent_user_id: Some("u1".into()),
        service: "products".into(),
        operation: ExcelOperation::Export,
        file_name: excel_file_name("products", ExcelOperation::Export, "u2", at),
        file_path: excel_object_key("products", "u2", ExcelOperation::Export, at),
        file_size: Some(4096),
        row_count: Some(120),
        expires_at: expiration_date_from(at),
        timestamp: at,
    }
}

#[tokio::test]
async fn test_published_event_reaches_subscriber() {
    let client = moon_lib::messaging::connect(&MessagingConfig::default())
        .await
        .expect("memory client");
    let mut subscription = client
        .subscribe(Subject::ExcelFileStored.as_str())
        .await
        .expect("subscribe");

    let publisher = ExcelFileStoredPublisher::from_config(client.clone(), &PublisherConfig::default());
    publisher.publish(&stored_file()).await.expect("publish");

    let event = subscription
        .next_event()
        .await
        .expect("one message")
        .expect("decodes");
    assert_eq!(event, Event::ExcelFileStored(stored_file()));
}

#[tokio::test]
async fn test_retry_delivers_exactly_one_message() {
    let client = Arc::new(FlakyClient {
        inner: MemoryClient::default(),
        failures: 2,
        calls: AtomicU32::new(0),
    });
    let mut subscription = client
        .subscribe(Subject::ExcelFileStored.as_str())
        .await
        .expect("subscribe");

    let sleeper = NoSleep::default();
    let publisher = RetryingPublisher::<ExcelFileStoredData, _>::with_sleeper(
        client.clone(),
        RetryPolicy::new(5, Duration::from_millis(100)),
        sleeper,
    );
    publisher.publish(&stored_file()).await.expect("third attempt succeeds");

    assert_eq!(client.calls.load(Ordering::SeqCst), 3);

    let message = subscription.next().await.expect("delivered");
    assert_eq!(message.subject, "excel:file-stored");
    let payload: serde_json::Value = serde_json::from_str(&message.payload).unwrap();
    assert_eq!(payload["filePath"], "excel/products/u2/export/products_export_u2_20240601083000.xlsx");
    assert_eq!(payload["expiresAt"], "2024-07-01T08:30:00Z");

    assert!(
        tokio::time::timeout(Duration::from_millis(50), subscription.next())
            .await
            .is_err(),
        "no duplicate delivery"
    );
}

#[tokio::test]
async fn test_disconnected_client_surfaces_messaging_error() {
    let memory = Arc::new(MemoryClient::default());
    memory.disconnect();

    let at = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
    let metadata = json!({"origin": "TR"});
    let data = BrandUpdatedData {
        id: "b1".into(),
        user_id: "u1".into(),
        name: "Acme".into(),
        code: Some("AC".into()),
        metadata: Some(metadata.clone()),
        content_hash: Some(content_hash(
            &ContentFields::new("Acme").with_code("AC").with_metadata(&metadata),
        )),
        version: 3,
        timestamp: at,
    };

    let publisher = BrandUpdatedPublisher::new(memory.clone());
    let err = publisher.publish(&data).await.unwrap_err();
    assert_eq!(err.client_error(), Some(&ClientError::NotConnected));

    let app_err: AppError = err.into();
    assert_eq!(app_err.kind, ErrorKind::Messaging);

    memory.reconnect();
    publisher.publish(&data).await.expect("publish after reconnect");
}
