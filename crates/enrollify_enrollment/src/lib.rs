// --- File: crates/enrollify_enrollment/src/lib.rs ---

pub mod error;
pub mod handlers;
pub mod logic;
pub mod routes;

// Re-export for main backend
pub use error::EnrollmentError;
pub use routes::routes;
