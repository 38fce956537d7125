// --- File: crates/enrollify_store/src/error.rs ---
use axum::response::{IntoResponse, Response};
use enrollify_common::{EnrollifyError, HttpStatusCode, IntoHttpResponse};
use thiserror::Error;

/// Store-specific error types.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A MongoDB operation failed
    #[error("MongoDB operation failed: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// A path parameter was not a valid document id
    #[error("Invalid document id: {0}")]
    InvalidId(#[from] mongodb::bson::oid::Error),

    /// A request body could not be converted into a BSON document
    #[error("Invalid document body: {0}")]
    InvalidBody(#[from] mongodb::bson::ser::Error),
}

/// Convert StoreError to EnrollifyError
impl From<StoreError> for EnrollifyError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Mongo(e) => EnrollifyError::DatabaseError(e.to_string()),
            StoreError::InvalidId(e) => {
                EnrollifyError::ValidationError(format!("invalid document id: {e}"))
            }
            StoreError::InvalidBody(e) => {
                EnrollifyError::ValidationError(format!("invalid document body: {e}"))
            }
        }
    }
}

impl HttpStatusCode for StoreError {
    fn status_code(&self) -> u16 {
        match self {
            StoreError::Mongo(_) => 500,
            StoreError::InvalidId(_) => 400,
            StoreError::InvalidBody(_) => 400,
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        EnrollifyError::from(self).into_http_response()
    }
}
