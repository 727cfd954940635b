//! Custom Axum extractors.

pub mod auth;
pub mod sub_user;
pub mod validated_json;

pub use auth::{AdminUser, AuthUser};
pub use sub_user::EffectiveUser;
pub use validated_json::ValidatedJson;
