// --- File: crates/enrollify_stripe/src/lib.rs ---

pub mod error;
pub mod handlers;
pub mod logic;
pub mod routes;

// Re-export for main backend
pub use error::StripeError;
pub use logic::{CreatePaymentIntentRequest, CreatePaymentIntentResponse};
pub use routes::routes;
