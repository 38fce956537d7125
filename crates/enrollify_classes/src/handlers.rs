// --- File: crates/enrollify_classes/src/handlers.rs ---
use axum::{
    extract::{Path, Query, State},
    Json,
};
use mongodb::bson::{doc, oid::ObjectId, to_document, Document};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::error;

use crate::error::ClassesError;
use crate::logic::{status_update, TOP_CLASSES_LIMIT};
use enrollify_store::{collect_docs, InsertOutcome, Store, StoreError, UpdateOutcome};

// --- State for Classes Handlers ---
#[derive(Clone)]
pub struct ClassesState {
    pub store: Arc<Store>,
}

/// The 6 classes with the highest `totalStudents`, descending. Tie order is
/// whatever the storage returns; callers must not rely on it.
#[axum::debug_handler]
pub async fn top_classes_handler(
    State(state): State<Arc<ClassesState>>,
) -> Result<Json<Vec<Document>>, ClassesError> {
    let cursor = state
        .store
        .classes()
        .find(doc! {})
        .sort(doc! { "totalStudents": -1 })
        .limit(TOP_CLASSES_LIMIT)
        .await
        .map_err(StoreError::from)?;
    Ok(Json(collect_docs(cursor).await?))
}

#[axum::debug_handler]
pub async fn approved_classes_handler(
    State(state): State<Arc<ClassesState>>,
) -> Result<Json<Vec<Document>>, ClassesError> {
    let cursor = state
        .store
        .classes()
        .find(doc! { "status": "approved" })
        .await
        .map_err(StoreError::from)?;
    Ok(Json(collect_docs(cursor).await?))
}

#[derive(Deserialize, Debug)]
pub struct EnrolledQuery {
    pub email: String,
}

/// Classes whose `students` array contains the given email.
#[axum::debug_handler]
pub async fn enrolled_classes_handler(
    State(state): State<Arc<ClassesState>>,
    Query(query): Query<EnrolledQuery>,
) -> Result<Json<Vec<Document>>, ClassesError> {
    let filter = doc! { "students": { "$in": [query.email] } };

    let cursor = state.store.classes().find(filter).await.map_err(|e| {
        error!("Failed to fetch enrolled classes: {e}");
        ClassesError::EnrolledFetch(e.into())
    })?;
    let classes = collect_docs(cursor).await.map_err(|e| {
        error!("Failed to fetch enrolled classes: {e}");
        ClassesError::EnrolledFetch(e)
    })?;
    Ok(Json(classes))
}

/// All classes, regardless of status. Bearer-guarded.
#[axum::debug_handler]
pub async fn all_classes_handler(
    State(state): State<Arc<ClassesState>>,
) -> Result<Json<Vec<Document>>, ClassesError> {
    let cursor = state
        .store
        .classes()
        .find(doc! {})
        .await
        .map_err(StoreError::from)?;
    Ok(Json(collect_docs(cursor).await?))
}

/// Insert a class submission verbatim. Status defaults to "pending" by
/// convention of downstream filtering, not by server-side stamping.
#[axum::debug_handler]
pub async fn add_class_handler(
    State(state): State<Arc<ClassesState>>,
    Json(payload): Json<Value>,
) -> Result<Json<InsertOutcome>, ClassesError> {
    let class = to_document(&payload).map_err(StoreError::from)?;
    let result = state
        .store
        .classes()
        .insert_one(class)
        .await
        .map_err(StoreError::from)?;
    Ok(Json(result.into()))
}

#[axum::debug_handler]
pub async fn instructor_classes_handler(
    State(state): State<Arc<ClassesState>>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Document>>, ClassesError> {
    let cursor = state
        .store
        .classes()
        .find(doc! { "instructor.email": email })
        .await
        .map_err(StoreError::from)?;
    Ok(Json(collect_docs(cursor).await?))
}

#[derive(Deserialize, Debug)]
pub struct StatusDecision {
    pub feedback: Option<String>,
}

/// Admin status decision: deny with feedback or approve without.
#[axum::debug_handler]
pub async fn decide_status_handler(
    State(state): State<Arc<ClassesState>>,
    Path(id): Path<String>,
    Json(decision): Json<StatusDecision>,
) -> Result<Json<UpdateOutcome>, ClassesError> {
    let id = ObjectId::parse_str(&id).map_err(StoreError::from)?;
    let update = status_update(decision.feedback.as_deref());

    let result = state
        .store
        .classes()
        .update_one(doc! { "_id": id }, update)
        .await
        .map_err(|e| {
            error!("Failed to update class status: {e}");
            ClassesError::StatusUpdate(e.into())
        })?;
    Ok(Json(result.into()))
}
