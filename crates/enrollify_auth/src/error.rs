// --- File: crates/enrollify_auth/src/error.rs ---
use axum::response::{IntoResponse, Response};
use enrollify_common::{EnrollifyError, HttpStatusCode, IntoHttpResponse};
use thiserror::Error;

/// Auth-specific error types.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Missing, malformed, expired or forged token
    #[error("Unauthorized access")]
    Unauthorized,

    /// The claims payload was not a JSON object
    #[error("Claims payload must be a JSON object")]
    InvalidClaims,

    /// ACCESS_TOKEN_SECRET is not set
    #[error("Token secret missing from environment")]
    MissingSecret,

    /// Signing the token failed
    #[error("Failed to sign token: {0}")]
    TokenCreation(#[from] jsonwebtoken::errors::Error),
}

/// Convert AuthError to EnrollifyError
impl From<AuthError> for EnrollifyError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthorized => {
                EnrollifyError::AuthError("Unauthorized access".to_string())
            }
            AuthError::InvalidClaims => {
                EnrollifyError::ValidationError("claims payload must be a JSON object".to_string())
            }
            AuthError::MissingSecret => {
                EnrollifyError::ConfigError("token secret missing from environment".to_string())
            }
            AuthError::TokenCreation(e) => {
                EnrollifyError::InternalError(format!("failed to sign token: {e}"))
            }
        }
    }
}

impl HttpStatusCode for AuthError {
    fn status_code(&self) -> u16 {
        match self {
            AuthError::Unauthorized => 401,
            AuthError::InvalidClaims => 400,
            AuthError::MissingSecret => 500,
            AuthError::TokenCreation(_) => 500,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            // The guard's rejection body is fixed; everything else uses the
            // shared error shape.
            AuthError::Unauthorized => crate::guard::unauthorized_response(),
            other => EnrollifyError::from(other).into_http_response(),
        }
    }
}
