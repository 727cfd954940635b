//! # moon-core
//!
//! Core crate for moon-lib. Contains the unified error system,
//! configuration schemas, shared enums (roles, permissions, statuses,
//! platforms, carriers), the cargo-label support table, and tracing setup.
//!
//! This crate has **no** internal dependencies on other moon crates.

pub mod cargo;
pub mod config;
pub mod error;
pub mod result;
pub mod telemetry;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
