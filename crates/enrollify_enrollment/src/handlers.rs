// --- File: crates/enrollify_enrollment/src/handlers.rs ---
use axum::{
    extract::{Path, Query, State},
    Json,
};
use mongodb::bson::{doc, oid::ObjectId, to_document, Document};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::error::EnrollmentError;
use crate::logic::{complete_payment, PaymentOutcome};
use enrollify_store::{collect_docs, DeleteOutcome, InsertOutcome, Store, StoreError};

// --- State for Enrollment Handlers ---
#[derive(Clone)]
pub struct EnrollmentState {
    pub store: Arc<Store>,
}

/// Record an enrollment intent verbatim. No duplicate check: selecting the
/// same class twice creates two intents.
#[axum::debug_handler]
pub async fn select_class_handler(
    State(state): State<Arc<EnrollmentState>>,
    Json(payload): Json<Value>,
) -> Result<Json<InsertOutcome>, EnrollmentError> {
    let selection = to_document(&payload).map_err(StoreError::from)?;
    let result = state
        .store
        .selected_classes()
        .insert_one(selection)
        .await
        .map_err(StoreError::from)?;
    Ok(Json(result.into()))
}

/// A single enrollment intent by id; `null` when it does not exist.
#[axum::debug_handler]
pub async fn selected_class_handler(
    State(state): State<Arc<EnrollmentState>>,
    Path(id): Path<String>,
) -> Result<Json<Option<Document>>, EnrollmentError> {
    let id = ObjectId::parse_str(&id).map_err(StoreError::from)?;
    let selection = state
        .store
        .selected_classes()
        .find_one(doc! { "_id": id })
        .await
        .map_err(StoreError::from)?;
    Ok(Json(selection))
}

/// All pending intents for a student. Bearer-guarded.
#[axum::debug_handler]
pub async fn student_classes_handler(
    State(state): State<Arc<EnrollmentState>>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Document>>, EnrollmentError> {
    let cursor = state
        .store
        .selected_classes()
        .find(doc! { "studentEmail": email })
        .await
        .map_err(StoreError::from)?;
    Ok(Json(collect_docs(cursor).await?))
}

/// Cancel an intent. Deleting an id that no longer exists is a
/// `deletedCount: 0` success, not an error.
#[axum::debug_handler]
pub async fn unselect_class_handler(
    State(state): State<Arc<EnrollmentState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteOutcome>, EnrollmentError> {
    let id = ObjectId::parse_str(&id).map_err(StoreError::from)?;
    let result = state
        .store
        .selected_classes()
        .delete_one(doc! { "_id": id })
        .await
        .map_err(StoreError::from)?;
    Ok(Json(result.into()))
}

/// Payment & enrollment completion; see `logic::complete_payment`.
#[axum::debug_handler]
pub async fn record_payment_handler(
    State(state): State<Arc<EnrollmentState>>,
    Json(payload): Json<Value>,
) -> Result<Json<PaymentOutcome>, EnrollmentError> {
    let payment = to_document(&payload).map_err(StoreError::from)?;
    let outcome = complete_payment(&state.store, payment).await?;
    Ok(Json(outcome))
}

#[derive(Deserialize, Debug)]
pub struct PaymentsQuery {
    pub email: String,
}

/// Ledger entries by payer email.
#[axum::debug_handler]
pub async fn payments_handler(
    State(state): State<Arc<EnrollmentState>>,
    Query(query): Query<PaymentsQuery>,
) -> Result<Json<Vec<Document>>, EnrollmentError> {
    let cursor = state
        .store
        .payments()
        .find(doc! { "email": query.email })
        .await
        .map_err(StoreError::from)?;
    Ok(Json(collect_docs(cursor).await?))
}
