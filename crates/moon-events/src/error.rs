//! Errors raised while decoding bus messages.

use thiserror::Error;

use moon_core::AppError;

/// Failure to turn a raw bus message into an [`Event`](crate::Event).
#[derive(Debug, Error)]
pub enum EventError {
    /// The subject is not part of the registry.
    #[error("Unknown subject: '{0}'")]
    UnknownSubject(String),
    /// The payload does not match the subject's contract.
    #[error("Invalid payload for subject '{subject}': {source}")]
    Payload {
        /// Subject the payload arrived on.
        subject: &'static str,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        AppError::validation(err.to_string())
    }
}
