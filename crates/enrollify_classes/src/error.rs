// --- File: crates/enrollify_classes/src/error.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use enrollify_common::{EnrollifyError, HttpStatusCode};
use enrollify_store::StoreError;
use serde_json::json;
use thiserror::Error;

/// Classes-specific error types.
#[derive(Error, Debug)]
pub enum ClassesError {
    /// Generic store failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Store failure while fetching enrolled classes; this route has its
    /// own error body on the wire
    #[error("Failed to fetch enrolled classes: {0}")]
    EnrolledFetch(StoreError),

    /// Store failure while applying a status decision; this route has its
    /// own error body on the wire
    #[error("Failed to update class status: {0}")]
    StatusUpdate(StoreError),
}

/// Convert ClassesError to EnrollifyError
impl From<ClassesError> for EnrollifyError {
    fn from(err: ClassesError) -> Self {
        match err {
            ClassesError::Store(e) => e.into(),
            ClassesError::EnrolledFetch(e) | ClassesError::StatusUpdate(e) => {
                EnrollifyError::DatabaseError(e.to_string())
            }
        }
    }
}

impl HttpStatusCode for ClassesError {
    fn status_code(&self) -> u16 {
        match self {
            ClassesError::Store(e) => e.status_code(),
            ClassesError::EnrolledFetch(_) => 500,
            ClassesError::StatusUpdate(_) => 500,
        }
    }
}

impl IntoResponse for ClassesError {
    fn into_response(self) -> Response {
        match self {
            ClassesError::Store(e) => e.into_response(),
            ClassesError::EnrolledFetch(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Failed to fetch enrolled classes" })),
            )
                .into_response(),
            ClassesError::StatusUpdate(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to update class status" })),
            )
                .into_response(),
        }
    }
}
