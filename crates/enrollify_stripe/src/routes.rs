// --- File: crates/enrollify_stripe/src/routes.rs ---

use crate::handlers::{create_payment_intent_handler, StripeState};
use axum::{middleware, routing::post, Router};
use enrollify_auth::{require_auth, JwtGuard};
use enrollify_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing all routes for the Stripe feature.
pub fn routes(config: Arc<AppConfig>, guard: Arc<JwtGuard>) -> Router {
    let stripe_state = Arc::new(StripeState { config });

    Router::new()
        .route("/create-payment-intent", post(create_payment_intent_handler))
        .route_layer(middleware::from_fn_with_state(guard, require_auth))
        .with_state(stripe_state)
}
