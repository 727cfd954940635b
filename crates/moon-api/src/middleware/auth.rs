//! Route guards on the authenticated user.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use moon_core::AppResult;
use moon_core::error::AppError;
use moon_core::types::CurrentUser;

/// Rejects requests that carry no [`CurrentUser`].
pub async fn require_auth(request: Request, next: Next) -> AppResult<Response> {
    if request.extensions().get::<CurrentUser>().is_none() {
        return Err(AppError::not_authorized("Not authorized"));
    }
    Ok(next.run(request).await)
}

/// Admits only admins.
///
/// A missing user and a non-admin user are both rejected as not
/// authorized, before any handler runs.
pub async fn require_auth_admin(request: Request, next: Next) -> AppResult<Response> {
    match request.extensions().get::<CurrentUser>() {
        Some(user) if user.is_admin() => {}
        Some(user) => {
            debug!(user_id = %user.id, role = %user.role, "Admin route refused");
            return Err(AppError::not_authorized("Not authorized"));
        }
        None => return Err(AppError::not_authorized("Not authorized")),
    }
    Ok(next.run(request).await)
}
