//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::Value;
use tower::ServiceExt;

use moon_lib::api::Claims;
use moon_lib::config::AuthConfig;
use moon_lib::types::{Permission, UserRole};

/// Secret shared by the test token issuer and decoder.
pub const JWT_SECRET: &str = "integration-secret";

/// Auth settings matching [`JWT_SECRET`].
pub fn auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: JWT_SECRET.to_string(),
        leeway_seconds: 0,
    }
}

/// Signs an access token for `sub`.
pub fn token(
    sub: &str,
    role: UserRole,
    parent_user: Option<&str>,
    permissions: Vec<Permission>,
) -> String {
    token_signed_with(JWT_SECRET, sub, role, parent_user, permissions)
}

/// Signs an access token with an arbitrary HMAC secret.
pub fn token_signed_with(
    secret: &str,
    sub: &str,
    role: UserRole,
    parent_user: Option<&str>,
    permissions: Vec<Permission>,
) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: sub.to_string(),
        email: None,
        role,
        parent_user: parent_user.map(String::from),
        permissions,
        exp: now + 3600,
        iat: now,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("sign token")
}

/// Test response
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Sends one request through `router` and parses the JSON body.
pub async fn request(
    router: &Router,
    method: &str,
    path: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(path);

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }

    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("encode body"))
        }
        None => Body::empty(),
    };

    send(router, builder.body(body).expect("build request")).await
}

/// Sends a raw request through `router`.
pub async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };

    TestResponse { status, body }
}
