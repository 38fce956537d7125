// --- File: crates/enrollify_auth/src/handlers.rs ---
use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::error::AuthError;
use crate::jwt::JwtGuard;

// --- State for Auth Handlers ---
#[derive(Clone)]
pub struct AuthState {
    pub guard: Arc<JwtGuard>,
}

#[derive(Serialize, Debug)]
pub struct TokenResponse {
    pub token: String,
}

/// Axum handler to issue a signed token for an arbitrary claims payload.
///
/// The claims are caller-supplied, not re-derived from an authenticated
/// identity. See DESIGN.md for why that stays.
#[axum::debug_handler]
pub async fn issue_token_handler(
    State(state): State<Arc<AuthState>>,
    Json(claims): Json<Value>,
) -> Result<Json<TokenResponse>, AuthError> {
    let token = state.guard.issue(claims)?;
    Ok(Json(TokenResponse { token }))
}
