// --- File: crates/enrollify_auth/src/guard.rs ---
//! Bearer-token guard middleware.
//!
//! Stateless: reads `Authorization: Bearer <token>`, verifies it against
//! the shared secret and attaches the decoded claims to the request
//! extensions, or short-circuits with the uniform 401 body.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::jwt::JwtGuard;

/// Decoded token claims, available to guarded handlers via
/// `Extension<Claims>`.
#[derive(Debug, Clone)]
pub struct Claims(pub Value);

/// The uniform rejection for missing, malformed, expired or forged tokens.
/// No detail about the failure is leaked to the caller.
pub fn unauthorized_response() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "Unauthorized access" })),
    )
        .into_response()
}

/// Guard middleware for bearer-protected routes.
///
/// On success the request continues to the handler with `Claims` attached;
/// on any failure the handler is never invoked.
pub async fn require_auth(
    State(guard): State<Arc<JwtGuard>>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(authorization) = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
    else {
        return unauthorized_response();
    };

    // "Bearer <token>"; anything after the scheme is treated as the token.
    let token = authorization.split_whitespace().nth(1).unwrap_or_default();

    match guard.verify(token) {
        Ok(claims) => {
            request.extensions_mut().insert(Claims(claims));
            next.run(request).await
        }
        Err(_) => unauthorized_response(),
    }
}
