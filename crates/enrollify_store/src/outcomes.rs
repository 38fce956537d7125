//! Serializable result shapes for store mutations.
//!
//! Success responses are the raw outcome of the underlying store operation.
//! These mirror the MongoDB Node driver's result objects
//! (`{acknowledged, insertedId}`, `{acknowledged, deletedCount}`,
//! `{acknowledged, matchedCount, modifiedCount, upsertedId}`), the wire
//! shape existing clients expect from the write endpoints.

use mongodb::bson::Bson;
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use serde::{Deserialize, Serialize};

/// Outcome of a single-document insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOutcome {
    pub acknowledged: bool,
    pub inserted_id: Bson,
}

impl From<InsertOneResult> for InsertOutcome {
    fn from(result: InsertOneResult) -> Self {
        Self {
            acknowledged: true,
            inserted_id: result.inserted_id,
        }
    }
}

/// Outcome of a single-document delete.
///
/// A zero-effect delete (`deletedCount: 0`) is still reported as success;
/// several routes rely on that no-op tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl From<DeleteResult> for DeleteOutcome {
    fn from(result: DeleteResult) -> Self {
        Self {
            acknowledged: true,
            deleted_count: result.deleted_count,
        }
    }
}

/// Outcome of a single-document update.
///
/// An update that matched nothing reports `matchedCount: 0` /
/// `modifiedCount: 0` rather than an error; the role-promotion routes
/// rely on this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<Bson>,
}

impl From<UpdateResult> for UpdateOutcome {
    fn from(result: UpdateResult) -> Self {
        Self {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result.upserted_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;
    use serde_json::json;

    #[test]
    fn insert_outcome_serializes_with_camel_case_keys() {
        let oid = ObjectId::new();
        let outcome = InsertOutcome {
            acknowledged: true,
            inserted_id: Bson::ObjectId(oid),
        };

        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["acknowledged"], json!(true));
        // ObjectIds serialize in extended-JSON form
        assert_eq!(value["insertedId"]["$oid"], json!(oid.to_hex()));
    }

    #[test]
    fn zero_effect_delete_is_success_shaped() {
        let outcome = DeleteOutcome {
            acknowledged: true,
            deleted_count: 0,
        };

        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value, json!({ "acknowledged": true, "deletedCount": 0 }));
    }

    #[test]
    fn update_outcome_reports_counts() {
        let outcome = UpdateOutcome {
            acknowledged: true,
            matched_count: 1,
            modified_count: 1,
            upserted_id: None,
        };

        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["matchedCount"], json!(1));
        assert_eq!(value["modifiedCount"], json!(1));
        assert_eq!(value["upsertedId"], json!(null));
    }
}
