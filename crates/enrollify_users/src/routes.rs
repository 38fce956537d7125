// --- File: crates/enrollify_users/src/routes.rs ---

use crate::handlers::{
    instructors_handler, list_users_handler, promote_admin_handler, promote_instructor_handler,
    register_user_handler, user_role_handler, UsersState,
};
use axum::{
    handler::Handler,
    middleware,
    routing::{get, patch, post},
    Router,
};
use enrollify_auth::{require_auth, JwtGuard};
use enrollify_store::Store;
use std::sync::Arc;

/// Creates a router containing all routes for the users feature.
///
/// `/users` mixes an open POST (self-registration) with a guarded GET, so
/// the guard is layered on the individual handlers rather than on a
/// sub-router.
pub fn routes(store: Arc<Store>, guard: Arc<JwtGuard>) -> Router {
    let users_state = Arc::new(UsersState { store });
    let auth = move || middleware::from_fn_with_state(guard.clone(), require_auth);

    Router::new()
        .route(
            "/users",
            post(register_user_handler).get(list_users_handler.layer(auth())),
        )
        .route("/user/role/{email}", get(user_role_handler))
        .route("/instructors", get(instructors_handler))
        .route("/users/admin/{id}", patch(promote_admin_handler.layer(auth())))
        .route(
            "/users/instructor/{id}",
            patch(promote_instructor_handler.layer(auth())),
        )
        .with_state(users_state)
}
