// --- File: crates/enrollify_enrollment/src/logic.rs ---
//! Payment & enrollment completion.
//!
//! The only multi-step sequence in the system. The three store operations
//! run in order without a transaction: the ledger insert is unconditional,
//! the intent delete decides whether the class roster moves, and the
//! roster update happens only when the delete removed exactly one
//! document. A delete that finds nothing (intent already cancelled or
//! paid) leaves the class counters untouched while the ledger entry
//! persists. That inconsistency window is a documented property of the
//! API, not a bug to guard against here. The single-document atomicity of
//! `delete_one` is the only concurrency guarantee the sequence relies on.

use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::Serialize;
use tracing::info;

use crate::error::EnrollmentError;
use enrollify_store::{DeleteOutcome, InsertOutcome, Store, StoreError};

/// The identifying fields a payment body must carry.
#[derive(Debug, PartialEq, Eq)]
pub struct PaymentKeys {
    pub email: String,
    pub selected_class_id: ObjectId,
    pub class_id: ObjectId,
}

/// Extract and validate the identifying fields before touching the store,
/// so a malformed body cannot leave a half-processed payment behind.
pub fn payment_keys(payment: &Document) -> Result<PaymentKeys, EnrollmentError> {
    let email = payment
        .get_str("email")
        .map_err(|_| EnrollmentError::MissingPaymentField("email"))?
        .to_string();
    let selected_class_id = payment
        .get_str("selectedClassId")
        .map_err(|_| EnrollmentError::MissingPaymentField("selectedClassId"))?;
    let class_id = payment
        .get_str("classId")
        .map_err(|_| EnrollmentError::MissingPaymentField("classId"))?;

    Ok(PaymentKeys {
        email,
        selected_class_id: ObjectId::parse_str(selected_class_id).map_err(StoreError::from)?,
        class_id: ObjectId::parse_str(class_id).map_err(StoreError::from)?,
    })
}

/// The class-roster update applied when an intent is consumed by payment:
/// one more enrolled student, one less available seat, the payer appended
/// to the students set.
pub fn enrollment_update(email: &str) -> Document {
    doc! {
        "$inc": { "enrolledStudents": 1, "availableSeats": -1 },
        "$push": { "students": email },
    }
}

/// What `/payment` returns: the outcomes of the ledger insert and the
/// intent delete. The roster update's outcome is not reported.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOutcome {
    pub result: InsertOutcome,
    pub delete_result: DeleteOutcome,
}

/// Run the payment-completion sequence. See the module docs for the
/// partial-failure semantics.
pub async fn complete_payment(
    store: &Store,
    payment: Document,
) -> Result<PaymentOutcome, EnrollmentError> {
    let keys = payment_keys(&payment)?;

    // Step 1: record the payment in the ledger, unconditionally.
    let insert = store
        .payments()
        .insert_one(payment)
        .await
        .map_err(StoreError::from)?;

    // Step 2: consume the enrollment intent.
    let delete = store
        .selected_classes()
        .delete_one(doc! { "_id": keys.selected_class_id })
        .await
        .map_err(StoreError::from)?;

    // Step 3: move the class roster, only if step 2 consumed the intent.
    if delete.deleted_count == 1 {
        store
            .classes()
            .update_one(
                doc! { "_id": keys.class_id },
                enrollment_update(&keys.email),
            )
            .await
            .map_err(StoreError::from)?;
    } else {
        info!(
            selected_class_id = %keys.selected_class_id,
            "Payment recorded for an already-consumed intent; class roster left untouched"
        );
    }

    Ok(PaymentOutcome {
        result: insert.into(),
        delete_result: delete.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;

    #[test]
    fn enrollment_update_moves_both_counters_and_appends_the_payer() {
        let update = enrollment_update("student@example.com");

        let inc = update.get_document("$inc").unwrap();
        assert_eq!(inc.get_i32("enrolledStudents").unwrap(), 1);
        assert_eq!(inc.get_i32("availableSeats").unwrap(), -1);

        let push = update.get_document("$push").unwrap();
        assert_eq!(
            push.get("students"),
            Some(&Bson::String("student@example.com".to_string()))
        );
    }

    #[test]
    fn payment_keys_parses_a_complete_body() {
        let selected = ObjectId::new();
        let class = ObjectId::new();
        let payment = doc! {
            "email": "student@example.com",
            "selectedClassId": selected.to_hex(),
            "classId": class.to_hex(),
            "amount": 50,
        };

        let keys = payment_keys(&payment).unwrap();
        assert_eq!(keys.email, "student@example.com");
        assert_eq!(keys.selected_class_id, selected);
        assert_eq!(keys.class_id, class);
    }

    #[test]
    fn payment_keys_rejects_missing_fields() {
        let missing_email = doc! {
            "selectedClassId": ObjectId::new().to_hex(),
            "classId": ObjectId::new().to_hex(),
        };
        assert!(matches!(
            payment_keys(&missing_email),
            Err(EnrollmentError::MissingPaymentField("email"))
        ));

        let missing_selected = doc! {
            "email": "student@example.com",
            "classId": ObjectId::new().to_hex(),
        };
        assert!(matches!(
            payment_keys(&missing_selected),
            Err(EnrollmentError::MissingPaymentField("selectedClassId"))
        ));
    }

    #[test]
    fn payment_keys_rejects_malformed_object_ids() {
        let payment = doc! {
            "email": "student@example.com",
            "selectedClassId": "not-an-object-id",
            "classId": ObjectId::new().to_hex(),
        };
        assert!(matches!(
            payment_keys(&payment),
            Err(EnrollmentError::Store(_))
        ));
    }
}
