//! Sub-user identity resolution.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use moon_core::AppResult;
use moon_core::error::AppError;
use moon_core::types::CurrentUser;

use crate::context::SubUserContext;

/// Attaches a [`SubUserContext`] for the authenticated user.
///
/// Anonymous requests and sub-users without a parent account are rejected.
pub async fn sub_user_context(mut request: Request, next: Next) -> AppResult<Response> {
    let user = request
        .extensions()
        .get::<CurrentUser>()
        .ok_or_else(|| AppError::not_authorized("Not authorized"))?;

    let context = SubUserContext::resolve(user)?;
    request.extensions_mut().insert(context);

    Ok(next.run(request).await)
}
