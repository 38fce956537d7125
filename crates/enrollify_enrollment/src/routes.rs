// --- File: crates/enrollify_enrollment/src/routes.rs ---

use crate::handlers::{
    payments_handler, record_payment_handler, select_class_handler, selected_class_handler,
    student_classes_handler, unselect_class_handler, EnrollmentState,
};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use enrollify_auth::{require_auth, JwtGuard};
use enrollify_store::Store;
use std::sync::Arc;

/// Creates a router containing all routes for the enrollment feature.
pub fn routes(store: Arc<Store>, guard: Arc<JwtGuard>) -> Router {
    let enrollment_state = Arc::new(EnrollmentState { store });

    let open = Router::new()
        .route("/class/{id}", get(selected_class_handler))
        .route("/payment", post(record_payment_handler))
        .route("/payments", get(payments_handler));

    // The path parameter is a student email for GET and an intent id for
    // DELETE; the router needs a single name for the segment.
    let guarded = Router::new()
        .route("/selectClass", post(select_class_handler))
        .route(
            "/student/classes/{key}",
            get(student_classes_handler).delete(unselect_class_handler),
        )
        .route_layer(middleware::from_fn_with_state(guard, require_auth));

    open.merge(guarded).with_state(enrollment_state)
}
