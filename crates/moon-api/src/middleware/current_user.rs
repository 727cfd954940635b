//! Bearer token decoding.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use crate::jwt::JwtDecoder;

/// Populates [`CurrentUser`](moon_core::types::CurrentUser) from the
/// `Authorization: Bearer` header.
///
/// Never rejects: a missing or invalid token leaves the request anonymous
/// and the guards downstream decide.
pub async fn current_user(
    State(decoder): State<Arc<JwtDecoder>>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());

    if let Some(token) = token {
        match decoder.current_user(token) {
            Ok(user) => {
                request.extensions_mut().insert(user);
            }
            Err(e) => debug!(error = %e.message, "Ignoring invalid bearer token"),
        }
    }

    next.run(request).await
}
