// --- File: crates/enrollify_users/src/error.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use enrollify_common::{EnrollifyError, HttpStatusCode};
use enrollify_store::StoreError;
use serde_json::json;
use thiserror::Error;

/// Users-specific error types.
#[derive(Error, Debug)]
pub enum UsersError {
    /// Registration conflict on the unique email
    #[error("User already exists")]
    AlreadyExists,

    /// Generic store failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convert UsersError to EnrollifyError
impl From<UsersError> for EnrollifyError {
    fn from(err: UsersError) -> Self {
        match err {
            UsersError::AlreadyExists => {
                EnrollifyError::ConflictError("User already exists".to_string())
            }
            UsersError::Store(e) => e.into(),
        }
    }
}

impl HttpStatusCode for UsersError {
    fn status_code(&self) -> u16 {
        match self {
            // Registration conflicts are reported as 400, not 409
            UsersError::AlreadyExists => 400,
            UsersError::Store(e) => e.status_code(),
        }
    }
}

impl IntoResponse for UsersError {
    fn into_response(self) -> Response {
        match self {
            UsersError::AlreadyExists => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "User already exists" })),
            )
                .into_response(),
            UsersError::Store(e) => e.into_response(),
        }
    }
}
