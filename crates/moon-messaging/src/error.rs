//! Messaging error types.

use thiserror::Error;

use moon_core::AppError;
use moon_events::Subject;

/// Error reported by a messaging client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The client has no live connection to the broker.
    #[error("Messaging client is not connected")]
    NotConnected,
    /// The broker refused the message.
    #[error("Message rejected: {0}")]
    Rejected(String),
    /// The broker did not acknowledge in time.
    #[error("Publish acknowledgement timed out")]
    Timeout,
    /// Network or protocol failure.
    #[error("Transport error: {0}")]
    Transport(String),
    /// The configured backend is not compiled in.
    #[error("Unsupported messaging backend: {0}")]
    Unsupported(String),
}

/// Failure of a publisher call.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The payload could not be serialized. Never retried.
    #[error("Failed to serialize payload for '{subject}': {source}")]
    Serialization {
        /// Target subject.
        subject: Subject,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// The client reported a failure for this attempt.
    #[error("Publish to '{subject}' failed: {source}")]
    Client {
        /// Target subject.
        subject: Subject,
        /// The client's error, unchanged.
        #[source]
        source: ClientError,
    },
}

impl PublishError {
    /// The underlying client error, if the failure came from the client.
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Client { source, .. } => Some(source),
            Self::Serialization { .. } => None,
        }
    }

    /// The subject the publish targeted.
    pub fn subject(&self) -> Subject {
        match self {
            Self::Serialization { subject, .. } | Self::Client { subject, .. } => *subject,
        }
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        AppError::with_source(moon_core::ErrorKind::Messaging, err.to_string(), err)
    }
}

impl From<PublishError> for AppError {
    fn from(err: PublishError) -> Self {
        let kind = match err {
            PublishError::Serialization { .. } => moon_core::ErrorKind::Serialization,
            PublishError::Client { .. } => moon_core::ErrorKind::Messaging,
        };
        AppError::with_source(kind, err.to_string(), err)
    }
}
