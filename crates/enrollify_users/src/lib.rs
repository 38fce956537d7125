// --- File: crates/enrollify_users/src/lib.rs ---

pub mod error;
pub mod handlers;
pub mod routes;

// Re-export for main backend
pub use error::UsersError;
pub use routes::routes;
