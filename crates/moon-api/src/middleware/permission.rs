//! Permission guard.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use moon_core::AppResult;
use moon_core::error::AppError;
use moon_core::types::{CurrentUser, Permission};

/// Admits users holding `permission`.
///
/// Install with `from_fn_with_state(Permission::ManageOrders, require_permission)`.
/// Anonymous requests are not authorized; authenticated users lacking the
/// permission are forbidden.
pub async fn require_permission(
    State(permission): State<Permission>,
    request: Request,
    next: Next,
) -> AppResult<Response> {
    let user = request
        .extensions()
        .get::<CurrentUser>()
        .ok_or_else(|| AppError::not_authorized("Not authorized"))?;

    if !user.has_permission(permission) {
        return Err(AppError::forbidden(format!(
            "Missing permission {}",
            permission.as_str()
        )));
    }

    Ok(next.run(request).await)
}
