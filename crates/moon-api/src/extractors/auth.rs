//! Extractors reading the user set by
//! [`current_user`](crate::middleware::current_user).

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;

use moon_core::error::AppError;
use moon_core::types::CurrentUser;

/// The authenticated user. Rejects anonymous requests.
#[derive(Debug, Clone)]
pub struct AuthUser(pub CurrentUser);

impl std::ops::Deref for AuthUser {
    type Target = CurrentUser;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| AppError::not_authorized("Not authorized"))
    }
}

/// An authenticated admin. Anyone else is not authorized.
#[derive(Debug, Clone)]
pub struct AdminUser(pub CurrentUser);

impl<S: Send + Sync> FromRequestParts<S> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthUser(user) =
            <AuthUser as FromRequestParts<S>>::from_request_parts(parts, state).await?;
        if !user.is_admin() {
            return Err(AppError::not_authorized("Not authorized"));
        }
        Ok(AdminUser(user))
    }
}

/// `Option<AuthUser>` never rejects.
impl<S: Send + Sync> OptionalFromRequestParts<S> for AuthUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(parts.extensions.get::<CurrentUser>().cloned().map(AuthUser))
    }
}
