//! Axum middleware functions.
//!
//! All of them are plain `async fn`s meant for
//! [`axum::middleware::from_fn`] or [`axum::middleware::from_fn_with_state`].
//! Rejections are [`AppError`](moon_core::AppError)s, rendered as the
//! shared JSON error body.

pub mod auth;
pub mod current_user;
pub mod logging;
pub mod permission;
pub mod sub_user;
pub mod validate;

pub use auth::{require_auth, require_auth_admin};
pub use current_user::current_user;
pub use logging::request_logging;
pub use permission::require_permission;
pub use sub_user::sub_user_context;
pub use validate::validate_body;
