//! Request body validation middleware.

use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::header::CONTENT_LENGTH;
use axum::middleware::Next;
use axum::response::Response;
use serde_json::Value;
use tracing::debug;

use moon_core::AppResult;
use moon_core::error::AppError;

use crate::validation::BodySchema;
use crate::validation::schema::into_app_error;

/// Largest body buffered for validation.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Checks the JSON body against `schema` before the handler runs.
///
/// Install with `from_fn_with_state(Arc::new(schema), validate_body)`.
/// Every failing field is listed under `details.errors` of the 400
/// response. An empty body is checked as `{}`. Bodies larger than
/// [`MAX_BODY_BYTES`] are refused with 413. The buffered body is handed on
/// unchanged, so handlers can still use `Json<T>`.
pub async fn validate_body(
    State(schema): State<Arc<BodySchema>>,
    request: Request,
    next: Next,
) -> AppResult<Response> {
    let declared = request
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok());
    if declared.is_some_and(|len| len > MAX_BODY_BYTES) {
        return Err(too_large());
    }

    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, MAX_BODY_BYTES).await.map_err(|e| {
        debug!(path = %parts.uri.path(), error = %e, "Request body not buffered");
        too_large()
    })?;

    let value: Value = if bytes.is_empty() {
        Value::Object(Default::default())
    } else {
        serde_json::from_slice(&bytes)
            .map_err(|e| AppError::validation(format!("Malformed JSON body: {e}")))?
    };

    if let Err(errors) = schema.validate(&value) {
        debug!(
            path = %parts.uri.path(),
            failures = errors.len(),
            "Request body rejected"
        );
        return Err(into_app_error(errors));
    }

    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}

fn too_large() -> AppError {
    AppError::payload_too_large(format!("Request body exceeds {MAX_BODY_BYTES} bytes"))
}
