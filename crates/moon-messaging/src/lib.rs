//! # moon-messaging
//!
//! Publishing side of the Moon message bus.
//!
//! Services hand a shared [`MessagingClient`] (owned by the service, not by
//! this crate) to typed publishers. [`Publisher`] sends one event kind to its
//! fixed subject exactly once per call; [`RetryingPublisher`] adds a linear
//! backoff retry loop for business-critical events.
//!
//! Delivery is at-least-once at best: retried messages carry no
//! deduplication key, so consumers that must not double-process have to
//! deduplicate on payload identity themselves.

pub mod client;
pub mod error;
pub mod publisher;

pub use client::{MessagingClient, RawMessage, Subscription, connect};
pub use error::{ClientError, PublishError};
pub use publisher::{Publisher, RetryPolicy, RetryingPublisher, Sleeper, TokioSleeper};
pub use publisher::publishers::*;

#[cfg(test)]
pub(crate) mod test_support;
