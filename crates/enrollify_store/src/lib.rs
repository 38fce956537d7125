// --- File: crates/enrollify_store/src/lib.rs ---

pub mod client;
pub mod error;
pub mod outcomes;

// Re-export for the feature crates
pub use client::{collect_docs, Store};
pub use error::StoreError;
pub use outcomes::{DeleteOutcome, InsertOutcome, UpdateOutcome};
