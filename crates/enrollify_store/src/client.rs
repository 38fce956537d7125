//! MongoDB client for Enrollify
//!
//! The store is a thin accessor over the four named collections. It owns
//! persistence only; no business rules live here. Handlers never cache
//! documents across requests, so the connected `Database` handle is the
//! only state.

use crate::error::StoreError;
use enrollify_config::DatabaseConfig;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection, Cursor, Database};
use tracing::info;

/// Thin accessor wrapping the four named collections.
///
/// Connected once at startup and injected as `Arc<Store>` into every
/// feature router, so the connection lifecycle is explicit rather than a
/// module-level singleton.
#[derive(Debug, Clone)]
pub struct Store {
    db: Database,
}

impl Store {
    /// Connect to MongoDB and ping the deployment.
    ///
    /// # Errors
    ///
    /// Returns an error if the URI is invalid or the server does not
    /// answer the ping.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(&config.uri).await?;
        let db = client.database(&config.database);

        // Send a ping to confirm a successful connection before serving.
        db.run_command(doc! { "ping": 1 }).await?;
        info!("Connected to MongoDB database '{}'", config.database);

        Ok(Self { db })
    }

    pub fn classes(&self) -> Collection<Document> {
        self.db.collection("classes")
    }

    pub fn users(&self) -> Collection<Document> {
        self.db.collection("users")
    }

    pub fn selected_classes(&self) -> Collection<Document> {
        self.db.collection("selectedClasses")
    }

    pub fn payments(&self) -> Collection<Document> {
        self.db.collection("payments")
    }
}

/// Drain a cursor into a `Vec` of raw documents.
pub async fn collect_docs(cursor: Cursor<Document>) -> Result<Vec<Document>, StoreError> {
    Ok(cursor.try_collect().await?)
}
