// --- File: crates/enrollify_auth/src/lib.rs ---

pub mod error;
pub mod guard;
pub mod handlers;
pub mod jwt;
pub mod routes;

// Re-export for the main backend and the feature crates
pub use error::AuthError;
pub use guard::{require_auth, Claims};
pub use jwt::JwtGuard;
pub use routes::routes;
