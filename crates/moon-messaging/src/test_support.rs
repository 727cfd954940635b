//! Fakes shared by the unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::client::{MessagingClient, Subscription};
use crate::error::ClientError;
use crate::publisher::Sleeper;

/// Client that records every publish and replays scripted outcomes.
///
/// Once the script runs out every publish succeeds.
#[derive(Debug, Default)]
pub(crate) struct ScriptedClient {
    outcomes: Mutex<VecDeque<Result<(), ClientError>>>,
    calls: Mutex<Vec<(String, String)>>,
    always_fail: Option<ClientError>,
}

impl ScriptedClient {
    pub(crate) fn new(outcomes: Vec<Result<(), ClientError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            ..Self::default()
        }
    }

    pub(crate) fn always_failing(error: ClientError) -> Self {
        Self {
            always_fail: Some(error),
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessagingClient for ScriptedClient {
    async fn publish(&self, subject: &str, message: String) -> Result<(), ClientError> {
        let attempt = {
            let mut calls = self.calls.lock().unwrap();
            calls.push((subject.to_string(), message));
            calls.len()
        };

        if let Some(error) = &self.always_fail {
            return Err(match error {
                ClientError::Transport(msg) => ClientError::Transport(format!("{msg} #{attempt}")),
                other => other.clone(),
            });
        }

        self.outcomes.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }

    async fn subscribe(&self, _subject: &str) -> Result<Subscription, ClientError> {
        Err(ClientError::Unsupported("scripted client".into()))
    }
}

/// Sleeper that records requested delays instead of waiting.
#[derive(Debug, Default)]
pub(crate) struct RecordingSleeper {
    delays: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub(crate) fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}
