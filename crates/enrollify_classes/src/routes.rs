// --- File: crates/enrollify_classes/src/routes.rs ---

use crate::handlers::{
    add_class_handler, all_classes_handler, approved_classes_handler, decide_status_handler,
    enrolled_classes_handler, instructor_classes_handler, top_classes_handler, ClassesState,
};
use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};
use enrollify_auth::{require_auth, JwtGuard};
use enrollify_store::Store;
use std::sync::Arc;

/// Creates a router containing all routes for the classes feature.
pub fn routes(store: Arc<Store>, guard: Arc<JwtGuard>) -> Router {
    let classes_state = Arc::new(ClassesState { store });

    let open = Router::new()
        .route("/topClasses", get(top_classes_handler))
        .route("/approvedClasses", get(approved_classes_handler))
        .route("/enrolledClasses", get(enrolled_classes_handler));

    let guarded = Router::new()
        .route("/classes", get(all_classes_handler))
        .route("/addClass", post(add_class_handler))
        .route("/instructor/classes/{email}", get(instructor_classes_handler))
        .route("/classes/status/{id}", patch(decide_status_handler))
        .route_layer(middleware::from_fn_with_state(guard, require_auth));

    open.merge(guarded).with_state(classes_state)
}
