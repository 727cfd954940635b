//! # moon-api
//!
//! HTTP plumbing shared by Moon services, built as axum middleware
//! functions and extractors:
//!
//! - [`middleware::current_user`] decodes the bearer token into a
//!   [`CurrentUser`](moon_core::types::CurrentUser),
//! - [`middleware::require_auth_admin`] and friends guard routes,
//! - [`middleware::sub_user_context`] resolves the effective account of a
//!   sub-user,
//! - [`middleware::validate_body`] applies a declarative [`BodySchema`].
//!
//! Errors are returned as [`AppError`](moon_core::AppError), which renders
//! itself as the shared JSON error body.

pub mod context;
pub mod extractors;
pub mod jwt;
pub mod middleware;
pub mod validation;

pub use context::{AuditContext, SubUserContext};
pub use jwt::{Claims, JwtDecoder};
pub use validation::{BodySchema, FieldError, FieldRule, FieldType};
