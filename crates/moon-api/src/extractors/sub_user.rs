//! Effective identity extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use moon_core::error::AppError;
use moon_core::types::CurrentUser;

use crate::context::SubUserContext;

/// The [`SubUserContext`] of the request.
///
/// Uses the context attached by
/// [`sub_user_context`](crate::middleware::sub_user_context) and resolves
/// it from the current user when that middleware is not installed.
#[derive(Debug, Clone)]
pub struct EffectiveUser(pub SubUserContext);

impl std::ops::Deref for EffectiveUser {
    type Target = SubUserContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S: Send + Sync> FromRequestParts<S> for EffectiveUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(context) = parts.extensions.get::<SubUserContext>() {
            return Ok(EffectiveUser(context.clone()));
        }

        let user = parts
            .extensions
            .get::<CurrentUser>()
            .ok_or_else(|| AppError::not_authorized("Not authorized"))?;
        SubUserContext::resolve(user).map(EffectiveUser)
    }
}
