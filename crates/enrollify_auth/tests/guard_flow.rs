//! Router-level tests for the bearer-token guard and the issuance route.
//!
//! These drive a real axum router through `tower::ServiceExt::oneshot`;
//! no network and no database are involved.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    middleware,
    routing::get,
    Extension, Json, Router,
};
use enrollify_auth::{require_auth, Claims, JwtGuard};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const SECRET: &str = "guard-flow-test-secret";

/// Echoes the claims the guard attached, proving the handler ran.
async fn whoami(Extension(claims): Extension<Claims>) -> Json<Value> {
    Json(claims.0)
}

fn guarded_app(guard: Arc<JwtGuard>) -> Router {
    Router::new()
        .route("/whoami", get(whoami))
        .route_layer(middleware::from_fn_with_state(guard, require_auth))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn missing_authorization_header_is_rejected() {
    let guard = Arc::new(JwtGuard::new(SECRET, 86_400));
    let app = guarded_app(guard);

    let response = app
        .oneshot(Request::get("/whoami").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Unauthorized access" })
    );
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let guard = Arc::new(JwtGuard::new(SECRET, 86_400));
    let app = guarded_app(guard);

    let response = app
        .oneshot(
            Request::get("/whoami")
                .header(header::AUTHORIZATION, "Bearer not-a-real-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_signed_with_wrong_secret_never_reaches_handler() {
    let guard = Arc::new(JwtGuard::new(SECRET, 86_400));
    let forger = JwtGuard::new("some-other-secret", 86_400);
    let token = forger.issue(json!({ "email": "mallory@example.com" })).unwrap();
    let app = guarded_app(guard);

    let response = app
        .oneshot(
            Request::get("/whoami")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Unauthorized access" })
    );
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let guard = Arc::new(JwtGuard::new(SECRET, 86_400));
    let stale = JwtGuard::new(SECRET, -3_600);
    let token = stale.issue(json!({ "email": "late@example.com" })).unwrap();
    let app = guarded_app(guard);

    let response = app
        .oneshot(
            Request::get("/whoami")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn valid_token_admits_request_with_claims_unchanged() {
    let guard = Arc::new(JwtGuard::new(SECRET, 86_400));
    let token = guard.issue(json!({ "email": "student@example.com" })).unwrap();
    let app = guarded_app(guard);

    let response = app
        .oneshot(
            Request::get("/whoami")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let claims = body_json(response).await;
    assert_eq!(claims["email"], json!("student@example.com"));
}

#[tokio::test]
async fn issuance_route_returns_verifiable_token() {
    let guard = Arc::new(JwtGuard::new(SECRET, 86_400));
    let app = enrollify_auth::routes(guard.clone());

    let response = app
        .oneshot(
            Request::post("/jwt")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"email":"student@example.com"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let token = body["token"].as_str().unwrap();

    let claims = guard.verify(token).unwrap();
    assert_eq!(claims["email"], json!("student@example.com"));
}
