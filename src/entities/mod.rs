//! Entity module - typed records for every tracked collection.
//!
//! Each collection maps one backend table to a struct that implements [`Record`].
//! The trait is the only thing the view engine knows about a record: which
//! fields are searchable, which field is the category/status, which field is the
//! date, what the amount is and how each sort key is compared.

pub mod application;
pub mod expense;
pub mod knowledge;
pub mod loan;
mod record;
pub mod script;
pub mod subscription;
pub mod todo;

pub use application::{Application, ApplicationSortKey};
pub use expense::{Expense, ExpenseSortKey};
pub use knowledge::{KnowledgeEntry, KnowledgeSortKey};
pub use loan::{Loan, LoanSortKey};
pub use record::{Record, RecordKind, SortValue};
pub use script::{Script, ScriptSortKey};
pub use subscription::{Subscription, SubscriptionSortKey};
pub use todo::{Todo, TodoSortKey};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes a nullable column into the type's default when it is `null`.
///
/// The backend returns `null` for empty columns; records treat those the same
/// as missing fields.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserializes an identifier that may be a UUID string or an integer key.
pub(crate) fn flexible_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
    }

    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Text(id)) => id,
        Some(RawId::Int(id)) => id.to_string(),
        None => String::new(),
    })
}

/// Deserializes a numeric column that may arrive as a number or a numeric string.
///
/// `null`, unparseable text and any other shape read as `0.0`.
pub(crate) fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0.0,
    })
}

/// Deserializes a flag column that defaults to `false`, see [`flag_or`].
pub(crate) fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(flag_or(Value::deserialize(deserializer)?, false))
}

/// Reads a boolean from `true`/`false`, `"true"`/`"yes"`/`"1"` style text or
/// a number (non-zero is true). Anything else is `default`.
pub(crate) fn flag_or(value: Value, default: bool) -> bool {
    match value {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().map_or(default, |n| n != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "t" | "yes" | "y" | "1" => true,
            "false" | "f" | "no" | "n" | "0" => false,
            _ => default,
        },
        _ => default,
    }
}

/// Parses a sort key name, normalizing case and `-`/`_` separators.
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace('-', "_")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "flexible_id")]
        id: String,
        #[serde(default, deserialize_with = "null_as_default")]
        name: String,
        #[serde(default, deserialize_with = "null_as_default")]
        tags: Vec<String>,
    }

    #[test]
    fn test_null_columns_become_defaults() {
        let row: Row = serde_json::from_str(r#"{"id": "a1", "name": null, "tags": null}"#).unwrap();
        assert_eq!(row.id, "a1");
        assert_eq!(row.name, "");
        assert!(row.tags.is_empty());
    }

    #[test]
    fn test_missing_columns_become_defaults() {
        let row: Row = serde_json::from_str("{}").unwrap();
        assert_eq!(row.id, "");
        assert_eq!(row.name, "");
    }

    #[test]
    fn test_integer_ids_are_stringified() {
        let row: Row = serde_json::from_str(r#"{"id": 42, "name": "x"}"#).unwrap();
        assert_eq!(row.id, "42");
    }

    #[derive(Debug, Deserialize)]
    struct Amounts {
        #[serde(default, deserialize_with = "lenient_number")]
        amount: f64,
        #[serde(default, deserialize_with = "lenient_flag")]
        done: bool,
    }

    fn amounts(json: &str) -> Amounts {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_numeric_strings_are_parsed() {
        let row = amounts(r#"{"amount": "12.50", "done": "true"}"#);
        assert!((row.amount - 12.5).abs() < f64::EPSILON);
        assert!(row.done);
    }

    #[test]
    fn test_wrong_shapes_read_as_defaults() {
        let row = amounts(r#"{"amount": "twelve", "done": {"nested": 1}}"#);
        assert!(row.amount.abs() < f64::EPSILON);
        assert!(!row.done);

        let row = amounts(r#"{"amount": [1], "done": 0}"#);
        assert!(row.amount.abs() < f64::EPSILON);
        assert!(!row.done);

        let row = amounts(r#"{"amount": null, "done": null}"#);
        assert!(row.amount.abs() < f64::EPSILON);
        assert!(!row.done);
    }

    #[test]
    fn test_flag_or_keeps_default_for_unknown_text() {
        assert!(flag_or(Value::String("maybe".to_string()), true));
        assert!(!flag_or(Value::String("No".to_string()), true));
        assert!(flag_or(Value::from(1), false));
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key(" Applied-Date "), "applied_date");
    }
}
