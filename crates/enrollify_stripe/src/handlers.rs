// --- File: crates/enrollify_stripe/src/handlers.rs ---
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use enrollify_config::AppConfig;
use std::sync::Arc;

use crate::error::StripeError;
use crate::logic::{create_payment_intent, CreatePaymentIntentRequest};

// --- State for Stripe Handlers ---
// Only needs AppConfig as reqwest::Client is static in enrollify_common.
#[derive(Clone)]
pub struct StripeState {
    pub config: Arc<AppConfig>,
}

/// Axum handler to create a Stripe PaymentIntent.
///
/// A missing, zero or negative price produces an empty success response
/// without calling the gateway.
#[axum::debug_handler]
pub async fn create_payment_intent_handler(
    State(state): State<Arc<StripeState>>,
    Json(payload): Json<CreatePaymentIntentRequest>,
) -> Result<Response, StripeError> {
    let Some(price) = payload.price.filter(|price| *price > 0.0) else {
        return Ok(StatusCode::OK.into_response());
    };

    let stripe_config = state.config.stripe.clone().unwrap_or_default();
    let response = create_payment_intent(&stripe_config, price).await?;
    Ok(Json(response).into_response())
}
