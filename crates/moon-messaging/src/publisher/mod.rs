//! Typed publishers.

pub mod base;
pub mod publishers;
pub mod retry;

pub use base::Publisher;
pub use retry::{RetryPolicy, RetryingPublisher, Sleeper, TokioSleeper};
