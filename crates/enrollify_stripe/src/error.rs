// --- File: crates/enrollify_stripe/src/error.rs ---
use axum::response::{IntoResponse, Response};
use enrollify_common::{EnrollifyError, HttpStatusCode, IntoHttpResponse};
use thiserror::Error;

/// Stripe-specific error types.
#[derive(Error, Debug)]
pub enum StripeError {
    /// Error occurred during a Stripe API request
    #[error("Stripe API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error returned by the Stripe API
    #[error("Stripe API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// Error parsing Stripe API response
    #[error("Failed to parse Stripe API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing or incomplete Stripe configuration
    #[error("Stripe configuration missing or incomplete")]
    ConfigError,

    /// Internal processing error
    #[error("Internal processing error: {0}")]
    InternalError(String),
}

/// Convert StripeError to EnrollifyError
impl From<StripeError> for EnrollifyError {
    fn from(err: StripeError) -> Self {
        match err {
            StripeError::RequestError(e) => {
                EnrollifyError::HttpError(format!("Stripe request error: {e}"))
            }
            StripeError::ApiError {
                status_code,
                message,
            } => EnrollifyError::ExternalServiceError {
                service_name: "Stripe API".to_string(),
                message: format!("Status: {status_code}, Message: {message}"),
            },
            StripeError::ParseError(e) => {
                EnrollifyError::ParseError(format!("Stripe response parse error: {e}"))
            }
            StripeError::ConfigError => EnrollifyError::ConfigError(
                "Stripe configuration missing or incomplete".to_string(),
            ),
            StripeError::InternalError(msg) => {
                EnrollifyError::InternalError(format!("Stripe internal error: {msg}"))
            }
        }
    }
}

/// Implement HttpStatusCode for StripeError to provide a consistent way to
/// convert StripeError to HTTP status codes.
impl HttpStatusCode for StripeError {
    fn status_code(&self) -> u16 {
        match self {
            StripeError::RequestError(_) => 500,
            StripeError::ApiError { status_code, .. } => *status_code,
            StripeError::ParseError(_) => 400,
            StripeError::ConfigError => 500,
            StripeError::InternalError(_) => 500,
        }
    }
}

impl IntoResponse for StripeError {
    fn into_response(self) -> Response {
        EnrollifyError::from(self).into_http_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_keep_the_upstream_status() {
        let err = StripeError::ApiError {
            status_code: 402,
            message: "card declined".to_string(),
        };
        assert_eq!(err.status_code(), 402);
    }

    #[test]
    fn config_errors_are_server_side() {
        assert_eq!(StripeError::ConfigError.status_code(), 500);
    }
}
