// --- File: crates/enrollify_auth/src/routes.rs ---

use crate::handlers::{issue_token_handler, AuthState};
use crate::jwt::JwtGuard;
use axum::{routing::post, Router};
use std::sync::Arc;

/// Creates a router containing the token-issuance route.
pub fn routes(guard: Arc<JwtGuard>) -> Router {
    let auth_state = Arc::new(AuthState { guard });

    Router::new()
        .route("/jwt", post(issue_token_handler))
        .with_state(auth_state)
}
