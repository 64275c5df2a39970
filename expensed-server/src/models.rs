//! Expense data model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single expense row.
///
/// `amount` is stored as DOUBLE PRECISION; the original data carried both
/// whole and fractional amounts, so floating point is the persisted form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Expense {
    pub id: i64,
    pub title: String,
    pub amount: f64,
    pub note: String,
    /// Ordered, non-unique tags, stored as a native TEXT[] column.
    pub tags: Vec<String>,
}

/// Request body for create and update.
///
/// Update is a full replace: every field here overwrites the row,
/// including `tags`. An `id` field in the body is ignored; ids are
/// assigned by storage only.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpensePayload {
    pub title: String,
    pub amount: f64,
    pub note: String,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_ignores_client_supplied_id() {
        let payload: ExpensePayload = serde_json::from_str(
            r#"{"id":99,"title":"Expense 1","amount":100,"note":"Note for expense 1","tags":["tag1","tag2"]}"#,
        )
        .unwrap();

        assert_eq!(payload.title, "Expense 1");
        assert_eq!(payload.amount, 100.0);
        assert_eq!(payload.tags, vec!["tag1", "tag2"]);
    }

    #[test]
    fn expense_serializes_tags_as_array() {
        let expense = Expense {
            id: 1,
            title: "Expense 1".into(),
            amount: 100.0,
            note: "Note for expense 1".into(),
            tags: vec!["tag1".into(), "tag2".into()],
        };

        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "title": "Expense 1",
                "amount": 100.0,
                "note": "Note for expense 1",
                "tags": ["tag1", "tag2"]
            })
        );
    }

    #[test]
    fn payload_rejects_missing_fields() {
        let result: std::result::Result<ExpensePayload, _> =
            serde_json::from_str(r#"{"title":"only a title"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_tags_roundtrip() {
        let payload: ExpensePayload = serde_json::from_str(
            r#"{"title":"t","amount":0.5,"note":"","tags":[]}"#,
        )
        .unwrap();
        assert!(payload.tags.is_empty());
    }
}
