// --- File: crates/enrollify_stripe/src/logic.rs ---
use enrollify_config::StripeConfig;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{error, info};

// Import the StripeError from the error module
use crate::error::StripeError;

// Import the HTTP client from enrollify_common
use enrollify_common::HTTP_CLIENT;

const PAYMENT_INTENTS_URL: &str = "https://api.stripe.com/v1/payment_intents";

// --- Data Structures ---

/// Request from our frontend to create a Stripe PaymentIntent.
#[derive(Deserialize, Debug)]
pub struct CreatePaymentIntentRequest {
    /// Price in major currency units; fractional values are allowed.
    pub price: Option<f64>,
}

/// What the caller needs to complete the payment client-side.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentResponse {
    pub client_secret: String,
}

#[derive(Deserialize, Debug)]
struct StripePaymentIntentApiResponse {
    pub id: String,
    pub client_secret: Option<String>,
}

/// Convert a price in major units to the minor units (cents) Stripe
/// expects, rounding to the nearest cent.
pub fn to_minor_units(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

/// Pull the human-readable message out of a Stripe error body, falling
/// back to the raw body when it does not parse.
fn stripe_error_message(body_text: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body_text) {
        Ok(json_body) => json_body
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
            .unwrap_or(body_text)
            .to_string(),
        Err(_) => body_text.to_string(),
    }
}

// --- Core Logic Function ---

/// Creates a Stripe PaymentIntent restricted to card payments.
pub async fn create_payment_intent(
    stripe_config: &StripeConfig,
    price: f64,
) -> Result<CreatePaymentIntentResponse, StripeError> {
    let stripe_secret_key = env::var("STRIPE_SECRET_KEY").map_err(|_| StripeError::ConfigError)?;

    let amount = to_minor_units(price);
    let currency = stripe_config
        .currency
        .clone()
        .unwrap_or_else(|| "usd".to_string())
        .to_lowercase();

    info!(
        "[Stripe Logic] Creating PaymentIntent: amount={} {} (from price {})",
        amount, currency, price
    );

    let form_body: Vec<(&str, String)> = vec![
        ("amount", amount.to_string()),
        ("currency", currency),
        ("payment_method_types[]", "card".to_string()),
    ];

    let response = HTTP_CLIENT
        .post(PAYMENT_INTENTS_URL)
        .basic_auth(stripe_secret_key, None::<&str>)
        .form(&form_body)
        .send()
        .await?;

    let status = response.status();
    let body_text = response.text().await?;

    info!("[Stripe Logic] Stripe API response status: {}", status);

    if status.is_success() {
        let intent: StripePaymentIntentApiResponse = serde_json::from_str(&body_text)?;
        match intent.client_secret {
            Some(client_secret) => {
                info!(
                    "[Stripe Logic] PaymentIntent {} created successfully",
                    intent.id
                );
                Ok(CreatePaymentIntentResponse { client_secret })
            }
            None => {
                error!(
                    "[Stripe Logic] Stripe response missing client_secret: {}",
                    body_text
                );
                Err(StripeError::InternalError(
                    "Stripe response missing client secret".to_string(),
                ))
            }
        }
    } else {
        let error_message = stripe_error_message(&body_text);
        error!(
            "[Stripe Logic] Stripe API request failed with HTTP status: {}. Message: {}",
            status, error_message
        );
        Err(StripeError::ApiError {
            status_code: status.as_u16(),
            message: error_message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_prices_convert_to_cents() {
        assert_eq!(to_minor_units(25.0), 2500);
        assert_eq!(to_minor_units(1.0), 100);
    }

    #[test]
    fn fractional_prices_round_to_the_nearest_cent() {
        assert_eq!(to_minor_units(19.99), 1999);
        assert_eq!(to_minor_units(0.005), 1);
    }

    #[test]
    fn intent_response_parses_with_and_without_client_secret() {
        let with: StripePaymentIntentApiResponse = serde_json::from_str(
            r#"{"id":"pi_123","object":"payment_intent","client_secret":"pi_123_secret_abc"}"#,
        )
        .unwrap();
        assert_eq!(with.id, "pi_123");
        assert_eq!(with.client_secret.as_deref(), Some("pi_123_secret_abc"));

        let without: StripePaymentIntentApiResponse =
            serde_json::from_str(r#"{"id":"pi_456","client_secret":null}"#).unwrap();
        assert!(without.client_secret.is_none());
    }

    #[test]
    fn error_message_is_extracted_from_stripe_error_bodies() {
        let body = r#"{"error":{"message":"Amount must be at least 50 cents","type":"invalid_request_error"}}"#;
        assert_eq!(
            stripe_error_message(body),
            "Amount must be at least 50 cents"
        );
        assert_eq!(stripe_error_message("plain text"), "plain text");
    }

    #[test]
    fn response_serializes_with_camel_case_key() {
        let response = CreatePaymentIntentResponse {
            client_secret: "pi_123_secret_abc".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "clientSecret": "pi_123_secret_abc" })
        );
    }
}
