//! # moon-events
//!
//! The subject registry and event contracts shared by every Moon service.
//!
//! Each subject is paired with exactly one payload type implementing
//! [`EventData`]. Consumers decode raw bus messages through
//! [`Event::decode`], a single exhaustive match over the registry.
//!
//! There is no envelope: the wire message is the JSON of the payload
//! itself, and versioned payloads carry their own `version`/`timestamp`.

mod catalog;
pub mod contract;
pub mod contracts;
pub mod error;

pub use catalog::{Event, Subject};
pub use contract::EventData;
pub use contracts::*;
pub use error::EventError;
