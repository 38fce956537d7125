// --- File: crates/enrollify_classes/src/logic.rs ---
use mongodb::bson::{doc, Bson, Document};

/// How many classes `/topClasses` returns.
pub const TOP_CLASSES_LIMIT: i64 = 6;

/// Build the `$set` document for an admin status decision.
///
/// Non-empty feedback denies the class and stores the feedback; absent or
/// empty feedback approves it, with the feedback field set to the falsy
/// value that came in. A single atomic field update, reversible by a later
/// decision and idempotent under repetition.
pub fn status_update(feedback: Option<&str>) -> Document {
    match feedback {
        Some(feedback) if !feedback.is_empty() => doc! {
            "$set": { "status": "denied", "feedback": feedback }
        },
        Some(feedback) => doc! {
            "$set": { "status": "approved", "feedback": feedback }
        },
        None => doc! {
            "$set": { "status": "approved", "feedback": Bson::Null }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_denies_and_is_stored() {
        let update = status_update(Some("too short"));
        let set = update.get_document("$set").unwrap();
        assert_eq!(set.get_str("status").unwrap(), "denied");
        assert_eq!(set.get_str("feedback").unwrap(), "too short");
    }

    #[test]
    fn missing_feedback_approves_with_null_feedback() {
        let update = status_update(None);
        let set = update.get_document("$set").unwrap();
        assert_eq!(set.get_str("status").unwrap(), "approved");
        assert_eq!(set.get("feedback"), Some(&Bson::Null));
    }

    #[test]
    fn empty_feedback_approves_and_keeps_the_falsy_value() {
        let update = status_update(Some(""));
        let set = update.get_document("$set").unwrap();
        assert_eq!(set.get_str("status").unwrap(), "approved");
        assert_eq!(set.get_str("feedback").unwrap(), "");
    }

    #[test]
    fn decision_is_idempotent_for_the_same_input() {
        assert_eq!(status_update(Some("too short")), status_update(Some("too short")));
        assert_eq!(status_update(None), status_update(None));
    }
}
