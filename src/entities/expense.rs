//! Expense entity - a single spend, dated and categorized.

use super::{
    Record, RecordKind, SortValue, flexible_id, lenient_number, normalize_key, null_as_default,
};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Expense row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Backend identifier
    #[serde(default, deserialize_with = "flexible_id")]
    pub id: String,
    /// What the money was spent on
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Spending category (Food, Transport, ...)
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    /// Amount spent
    #[serde(default, deserialize_with = "lenient_number")]
    pub amount: f64,
    /// Date of the spend (`YYYY-MM-DD`)
    #[serde(default)]
    pub date: Option<String>,
    /// Card, cash, transfer...
    #[serde(default, deserialize_with = "null_as_default")]
    pub payment_method: String,
    /// Free-form notes
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
    /// Server-assigned creation timestamp
    #[serde(default)]
    pub created_at: Option<String>,
    /// Server-assigned update timestamp
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Sort keys for expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseSortKey {
    /// Date of the spend
    #[default]
    Date,
    /// Amount spent
    Amount,
    /// Description text
    Description,
    /// Category, by configured category order
    Category,
}

impl FromStr for ExpenseSortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_key(s).as_str() {
            "date" => Ok(Self::Date),
            "amount" => Ok(Self::Amount),
            "description" => Ok(Self::Description),
            "category" => Ok(Self::Category),
            _ => Err(Error::invalid("sort", s)),
        }
    }
}

impl Record for Expense {
    type SortKey = ExpenseSortKey;

    const KIND: RecordKind = RecordKind::Expenses;

    const EXPORT_COLUMNS: &'static [&'static str] = &[
        "id",
        "date",
        "description",
        "category",
        "amount",
        "payment_method",
        "notes",
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.description
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            self.description.as_str(),
            self.category.as_str(),
            self.payment_method.as_str(),
            self.notes.as_str(),
        ]
    }

    fn category(&self) -> Option<&str> {
        Some(self.category.as_str()).filter(|c| !c.is_empty())
    }

    fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    fn amount(&self) -> Option<f64> {
        Some(self.amount)
    }

    fn sort_value(&self, key: ExpenseSortKey) -> SortValue<'_> {
        match key {
            ExpenseSortKey::Date => SortValue::Date(self.date.as_deref()),
            ExpenseSortKey::Amount => SortValue::Number(self.amount),
            ExpenseSortKey::Description => SortValue::Text(&self.description),
            ExpenseSortKey::Category => SortValue::Ranked(&self.category),
        }
    }

    fn export_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.date.clone().unwrap_or_default(),
            self.description.clone(),
            self.category.clone(),
            format!("{:.2}", self.amount),
            self.payment_method.clone(),
            self.notes.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_deserialize_with_null_amount() {
        let expense: Expense =
            serde_json::from_str(r#"{"id": 3, "description": "Lunch", "amount": null}"#).unwrap();
        assert_eq!(expense.id, "3");
        assert_eq!(expense.amount, 0.0);
        assert_eq!(expense.date(), None);
        assert_eq!(expense.category(), None);
    }

    #[test]
    fn test_export_formats_amount() {
        let expense = Expense {
            amount: 12.5,
            ..Default::default()
        };
        assert_eq!(expense.export_row()[4], "12.50");
    }
}
