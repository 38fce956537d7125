// --- File: crates/enrollify_common/src/error.rs ---
use thiserror::Error;

/// The base error type for all Enrollify errors.
///
/// This enum provides a common set of error variants that can be used across
/// all crates. Each crate can extend this by implementing
/// From<SpecificError> for EnrollifyError.
#[derive(Error, Debug)]
pub enum EnrollifyError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during authentication or authorization
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during database operation
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to a conflict (e.g., resource already exists)
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
///
/// This trait can be implemented by error types to provide a consistent way
/// to convert errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for EnrollifyError {
    fn status_code(&self) -> u16 {
        match self {
            EnrollifyError::HttpError(_) => 500,
            EnrollifyError::ParseError(_) => 400,
            EnrollifyError::ConfigError(_) => 500,
            EnrollifyError::AuthError(_) => 401,
            EnrollifyError::ValidationError(_) => 400,
            EnrollifyError::DatabaseError(_) => 500,
            EnrollifyError::ExternalServiceError { .. } => 502,
            EnrollifyError::ConflictError(_) => 409,
            EnrollifyError::NotFoundError(_) => 404,
            EnrollifyError::InternalError(_) => 500,
        }
    }
}
