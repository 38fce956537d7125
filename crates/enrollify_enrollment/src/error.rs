// --- File: crates/enrollify_enrollment/src/error.rs ---
use axum::response::{IntoResponse, Response};
use enrollify_common::{EnrollifyError, HttpStatusCode, IntoHttpResponse};
use enrollify_store::StoreError;
use thiserror::Error;

/// Enrollment-specific error types.
#[derive(Error, Debug)]
pub enum EnrollmentError {
    /// The payment body is missing a required field
    #[error("Payment is missing required field '{0}'")]
    MissingPaymentField(&'static str),

    /// Generic store failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convert EnrollmentError to EnrollifyError
impl From<EnrollmentError> for EnrollifyError {
    fn from(err: EnrollmentError) -> Self {
        match err {
            EnrollmentError::MissingPaymentField(field) => EnrollifyError::ValidationError(
                format!("payment is missing required field '{field}'"),
            ),
            EnrollmentError::Store(e) => e.into(),
        }
    }
}

impl HttpStatusCode for EnrollmentError {
    fn status_code(&self) -> u16 {
        match self {
            EnrollmentError::MissingPaymentField(_) => 400,
            EnrollmentError::Store(e) => e.status_code(),
        }
    }
}

impl IntoResponse for EnrollmentError {
    fn into_response(self) -> Response {
        match self {
            EnrollmentError::Store(e) => e.into_response(),
            other => EnrollifyError::from(other).into_http_response(),
        }
    }
}
