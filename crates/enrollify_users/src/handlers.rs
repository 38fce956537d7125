// --- File: crates/enrollify_users/src/handlers.rs ---
use axum::{
    extract::{Path, State},
    Json,
};
use mongodb::bson::{doc, oid::ObjectId, to_document, Bson, Document};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::error::UsersError;
use enrollify_store::{collect_docs, InsertOutcome, Store, StoreError, UpdateOutcome};

// --- State for Users Handlers ---
#[derive(Clone)]
pub struct UsersState {
    pub store: Arc<Store>,
}

/// All users. Bearer-guarded.
#[axum::debug_handler]
pub async fn list_users_handler(
    State(state): State<Arc<UsersState>>,
) -> Result<Json<Vec<Document>>, UsersError> {
    let cursor = state
        .store
        .users()
        .find(doc! {})
        .await
        .map_err(StoreError::from)?;
    Ok(Json(collect_docs(cursor).await?))
}

/// Self-registration: the email is the natural key; a second registration
/// for the same email is a 400 conflict and creates no record.
#[axum::debug_handler]
pub async fn register_user_handler(
    State(state): State<Arc<UsersState>>,
    Json(payload): Json<Value>,
) -> Result<Json<InsertOutcome>, UsersError> {
    let user = to_document(&payload).map_err(StoreError::from)?;
    let email = user.get("email").cloned().unwrap_or(Bson::Null);

    let existing = state
        .store
        .users()
        .find_one(doc! { "email": email })
        .await
        .map_err(StoreError::from)?;
    if existing.is_some() {
        return Err(UsersError::AlreadyExists);
    }

    let result = state
        .store
        .users()
        .insert_one(user)
        .await
        .map_err(StoreError::from)?;
    Ok(Json(result.into()))
}

#[derive(Serialize, Debug)]
pub struct RoleResponse {
    /// Absent for plain students; the key is dropped from the response
    /// entirely rather than serialized as null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Bson>,
}

#[axum::debug_handler]
pub async fn user_role_handler(
    State(state): State<Arc<UsersState>>,
    Path(email): Path<String>,
) -> Result<Json<RoleResponse>, UsersError> {
    let user = state
        .store
        .users()
        .find_one(doc! { "email": email })
        .await
        .map_err(StoreError::from)?;

    let role = user.and_then(|user| user.get("role").cloned());
    Ok(Json(RoleResponse { role }))
}

/// Every instructor, joined with the classes whose `instructor.email`
/// matches, nested under `classes`. Result ordering is unspecified.
#[axum::debug_handler]
pub async fn instructors_handler(
    State(state): State<Arc<UsersState>>,
) -> Result<Json<Vec<Document>>, UsersError> {
    let pipeline = vec![
        doc! { "$match": { "role": "instructor" } },
        doc! { "$lookup": {
            "from": "classes",
            "localField": "email",
            "foreignField": "instructor.email",
            "as": "classes",
        }},
    ];

    let cursor = state
        .store
        .users()
        .aggregate(pipeline)
        .await
        .map_err(StoreError::from)?;
    Ok(Json(collect_docs(cursor).await?))
}

/// Idempotent role promotion. A missing id is reported as a
/// zero-modified-count success outcome, not an error.
async fn promote(state: &UsersState, id: &str, role: &str) -> Result<UpdateOutcome, UsersError> {
    let id = ObjectId::parse_str(id).map_err(StoreError::from)?;
    let result = state
        .store
        .users()
        .update_one(doc! { "_id": id }, doc! { "$set": { "role": role } })
        .await
        .map_err(StoreError::from)?;
    Ok(result.into())
}

#[axum::debug_handler]
pub async fn promote_admin_handler(
    State(state): State<Arc<UsersState>>,
    Path(id): Path<String>,
) -> Result<Json<UpdateOutcome>, UsersError> {
    Ok(Json(promote(&state, &id, "admin").await?))
}

#[axum::debug_handler]
pub async fn promote_instructor_handler(
    State(state): State<Arc<UsersState>>,
    Path(id): Path<String>,
) -> Result<Json<UpdateOutcome>, UsersError> {
    Ok(Json(promote(&state, &id, "instructor").await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_response_drops_absent_role() {
        let body = serde_json::to_value(RoleResponse { role: None }).unwrap();
        assert_eq!(body, serde_json::json!({}));
    }

    #[test]
    fn role_response_surfaces_stored_role() {
        let body = serde_json::to_value(RoleResponse {
            role: Some(Bson::String("instructor".to_string())),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "role": "instructor" }));
    }
}
