// --- File: crates/enrollify_classes/src/lib.rs ---

pub mod error;
pub mod handlers;
pub mod logic;
pub mod routes;

// Re-export for main backend
pub use error::ClassesError;
pub use routes::routes;
