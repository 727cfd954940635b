//! # moon-lib
//!
//! Shared building blocks of the Moon e-commerce integration services.
//!
//! - [`events`]: the subject registry and one payload contract per subject
//! - [`messaging`]: the messaging client seam and typed publishers
//! - [`api`]: axum middlewares, body validation and extractors
//! - [`types`] and [`cargo`]: shared enums and cargo label rules
//! - [`utils`]: content hashing, excel paths, access checks
//!
//! ```ignore
//! let config = moon_lib::config::MoonConfig::load("production")?;
//! moon_lib::telemetry::init_tracing(&config.logging)?;
//! let client = moon_lib::messaging::connect(&config.messaging).await?;
//! let publisher = moon_lib::messaging::ExcelFileStoredPublisher::from_config(client, &config.publisher);
//! ```

pub use moon_api as api;
pub use moon_core::{AppError, AppResult, ErrorKind, cargo, config, telemetry, types};
pub use moon_events as events;
pub use moon_messaging as messaging;
pub use moon_utils as utils;
