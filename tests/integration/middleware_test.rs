//! Integration tests for the HTTP middlewares and extractors.

mod helpers;

use std::sync::Arc;

use axum::body::Body;
use axum::routing::{get, post};
use axum::{Json, Router, middleware};
use http::{Request, StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};

use moon_lib::api::extractors::{AdminUser, AuthUser, EffectiveUser, ValidatedJson};
use moon_lib::api::middleware::validate::MAX_BODY_BYTES;
use moon_lib::api::validation::{NumberRules, StringRules};
use moon_lib::api::{BodySchema, FieldRule, FieldType, JwtDecoder, SubUserContext, middleware as mw};
use moon_lib::types::{Permission, UserRole};

use helpers::{request, send, token, token_signed_with};

fn decoder() -> Arc<JwtDecoder> {
    Arc::new(JwtDecoder::new(&helpers::auth_config()).expect("auth config has a secret"))
}

async fn whoami(user: Option<AuthUser>) -> Json<Value> {
    Json(json!({ "id": user.map(|u| u.id.clone()) }))
}

async fn context(EffectiveUser(ctx): EffectiveUser) -> Json<SubUserContext> {
    Json(ctx)
}

async fn admin_only(AdminUser(user): AdminUser) -> Json<Value> {
    Json(json!({ "admin": user.id }))
}

async fn echo(Json(body): Json<Value>) -> Json<Value> {
    Json(body)
}

/// `current_user` is the outermost layer so every inner layer sees the user.
fn app() -> Router {
    let admin = Router::new()
        .route("/admin/stats", get(|| async { "ok" }))
        .route_layer(middleware::from_fn(mw::require_auth_admin));

    let orders = Router::new()
        .route("/orders", post(|| async { "created" }))
        .route_layer(middleware::from_fn_with_state(
            Permission::ManageOrders,
            mw::require_permission,
        ));

    let schema = BodySchema::new()
        .field(FieldRule::required(
            "name",
            FieldType::String(StringRules::non_empty()),
        ))
        .field(FieldRule::required(
            "quantity",
            FieldType::Number(NumberRules {
                min: Some(0.0),
                integer: true,
                ..NumberRules::default()
            }),
        ))
        .field(FieldRule::optional("email", FieldType::Email));

    let validated = Router::new()
        .route("/products", post(echo))
        .route_layer(middleware::from_fn_with_state(
            Arc::new(schema),
            mw::validate_body,
        ));

    let scoped = Router::new()
        .route("/context", get(context))
        .route_layer(middleware::from_fn(mw::sub_user_context));

    Router::new()
        .route("/me", get(whoami))
        .route("/extract/admin", get(admin_only))
        .route("/brands", post(create_brand))
        .merge(admin)
        .merge(orders)
        .merge(validated)
        .merge(scoped)
        .layer(middleware::from_fn(mw::request_logging))
        .layer(middleware::from_fn_with_state(decoder(), mw::current_user))
}

#[derive(Debug, Deserialize, validator::Validate)]
struct CreateBrand {
    #[validate(length(min = 1, message = "name is required"))]
    name: String,
}

async fn create_brand(ValidatedJson(body): ValidatedJson<CreateBrand>) -> Json<Value> {
    Json(json!({ "name": body.name }))
}

#[tokio::test]
async fn test_require_auth_admin_rejects_anonymous() {
    let response = request(&app(), "GET", "/admin/stats", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "NOT_AUTHORIZED");
}

#[tokio::test]
async fn test_require_auth_admin_rejects_non_admin() {
    let user = token("u1", UserRole::User, None, vec![]);
    let response = request(&app(), "GET", "/admin/stats", None, Some(&user)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_require_auth_admin_admits_admin() {
    let admin = token("a1", UserRole::Admin, None, vec![]);
    let response = request(&app(), "GET", "/admin/stats", None, Some(&admin)).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_admin_token_signed_with_empty_key_refused() {
    let forged = token_signed_with("", "attacker", UserRole::Admin, None, vec![]);
    let app = app();

    let guarded = request(&app, "GET", "/admin/stats", None, Some(&forged)).await;
    assert_eq!(guarded.status, StatusCode::UNAUTHORIZED);

    let extracted = request(&app, "GET", "/extract/admin", None, Some(&forged)).await;
    assert_eq!(extracted.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_invalid_token_leaves_request_anonymous() {
    let app = app();

    let response = request(&app, "GET", "/me", None, Some("garbage")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], Value::Null);

    let valid = token("u1", UserRole::User, None, vec![]);
    let response = request(&app, "GET", "/me", None, Some(&valid)).await;
    assert_eq!(response.body["id"], "u1");
}

#[tokio::test]
async fn test_sub_user_context_uses_parent() {
    let sub = token("u2", UserRole::SubUser, Some("u1"), vec![]);
    let response = request(&app(), "GET", "/context", None, Some(&sub)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["effectiveUserId"], "u1");
    assert_eq!(response.body["actualUserId"], "u2");
    assert_eq!(response.body["isSubUser"], true);
    assert_eq!(response.body["auditContext"]["parentUserId"], "u1");
}

#[tokio::test]
async fn test_sub_user_context_for_regular_user() {
    let user = token("u1", UserRole::User, None, vec![]);
    let response = request(&app(), "GET", "/context", None, Some(&user)).await;

    assert_eq!(response.body["effectiveUserId"], "u1");
    assert_eq!(response.body["isSubUser"], false);
}

#[tokio::test]
async fn test_orphan_sub_user_rejected() {
    let orphan = token("u2", UserRole::SubUser, None, vec![]);
    let response = request(&app(), "GET", "/context", None, Some(&orphan)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_sub_user_context_rejects_anonymous() {
    let response = request(&app(), "GET", "/context", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "NOT_AUTHORIZED");
}

#[tokio::test]
async fn test_require_permission() {
    let app = app();

    let anonymous = request(&app, "POST", "/orders", None, None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let viewer = token("u2", UserRole::SubUser, Some("u1"), vec![Permission::ViewOrders]);
    let denied = request(&app, "POST", "/orders", None, Some(&viewer)).await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);
    assert_eq!(denied.body["error"], "FORBIDDEN");

    let manager = token("u3", UserRole::SubUser, Some("u1"), vec![Permission::ManageOrders]);
    let allowed = request(&app, "POST", "/orders", None, Some(&manager)).await;
    assert_eq!(allowed.status, StatusCode::OK);

    let owner = token("u1", UserRole::User, None, vec![]);
    let allowed = request(&app, "POST", "/orders", None, Some(&owner)).await;
    assert_eq!(allowed.status, StatusCode::OK);
}

#[tokio::test]
async fn test_validate_body_lists_every_failure() {
    let body = json!({ "quantity": -2, "email": "nope" });
    let response = request(&app(), "POST", "/products", Some(body), None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let fields: Vec<&str> = response.body["details"]["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .map(|e| e["field"].as_str().unwrap_or_default())
        .collect();
    assert_eq!(fields, vec!["name", "quantity", "email"]);
}

#[tokio::test]
async fn test_validate_body_passes_body_through() {
    let body = json!({ "name": "Lamp", "quantity": 3 });
    let response = request(&app(), "POST", "/products", Some(body.clone()), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, body);
}

#[tokio::test]
async fn test_validate_body_rejects_malformed_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/products")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .expect("build request");

    let response = send(&app(), request).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_validate_body_treats_empty_body_as_empty_object() {
    let response = request(&app(), "POST", "/products", None, None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["details"]["errors"],
        json!([
            { "field": "name", "message": "name is required" },
            { "field": "quantity", "message": "quantity is required" },
        ])
    );
}

#[tokio::test]
async fn test_validate_body_refuses_oversized_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/products")
        .header("content-type", "application/json")
        .body(Body::from(vec![b' '; MAX_BODY_BYTES + 1]))
        .expect("build request");

    let response = send(&app(), request).await;
    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response.body["error"], "PAYLOAD_TOO_LARGE");
}

#[tokio::test]
async fn test_validate_body_refuses_oversized_content_length() {
    let request = Request::builder()
        .method("POST")
        .uri("/products")
        .header("content-type", "application/json")
        .header("content-length", (MAX_BODY_BYTES + 1).to_string())
        .body(Body::from("{}"))
        .expect("build request");

    let response = send(&app(), request).await;
    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_validated_json_extractor() {
    let app = app();

    let bad = request(&app, "POST", "/brands", Some(json!({ "name": "" })), None).await;
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad.body["details"]["errors"][0]["field"], "name");
    assert_eq!(bad.body["details"]["errors"][0]["message"], "name is required");

    let good = request(&app, "POST", "/brands", Some(json!({ "name": "Acme" })), None).await;
    assert_eq!(good.status, StatusCode::OK);
    assert_eq!(good.body["name"], "Acme");
}

#[tokio::test]
async fn test_admin_extractor() {
    let app = app();

    let user = token("u1", UserRole::User, None, vec![]);
    let refused = request(&app, "GET", "/extract/admin", None, Some(&user)).await;
    assert_eq!(refused.status, StatusCode::UNAUTHORIZED);

    let admin = token("a1", UserRole::Admin, None, vec![]);
    let admitted = request(&app, "GET", "/extract/admin", None, Some(&admin)).await;
    assert_eq!(admitted.body["admin"], "a1");
}
