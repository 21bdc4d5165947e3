//! Subscription entity - a recurring charge billed on a fixed cycle.

use super::{
    Record, RecordKind, SortValue, flag_or, flexible_id, lenient_number, normalize_key,
    null_as_default,
};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Subscription row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Backend identifier
    #[serde(default, deserialize_with = "flexible_id")]
    pub id: String,
    /// Service name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Service category (Streaming, Software, ...)
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    /// Charge per billing cycle
    #[serde(default, deserialize_with = "lenient_number")]
    pub amount: f64,
    /// `weekly`, `monthly`, `quarterly` or `yearly`
    #[serde(default, deserialize_with = "null_as_default")]
    pub billing_cycle: String,
    /// Next charge date (`YYYY-MM-DD`)
    #[serde(default)]
    pub next_billing_date: Option<String>,
    /// Whether the subscription is still being charged
    #[serde(default = "default_active", deserialize_with = "active_or_default")]
    pub is_active: bool,
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

const fn default_active() -> bool {
    true
}

fn active_or_default<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(flag_or(serde_json::Value::deserialize(deserializer)?, true))
}

impl Default for Subscription {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            category: String::new(),
            amount: 0.0,
            billing_cycle: String::new(),
            next_billing_date: None,
            is_active: true,
            notes: String::new(),
            created_at: None,
            updated_at: None,
        }
    }
}

/// Sort keys for subscriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubscriptionSortKey {
    /// Next charge date
    #[default]
    NextBillingDate,
    /// Service name
    Name,
    /// Charge per cycle
    Amount,
    /// Category, by configured order
    Category,
}

impl FromStr for SubscriptionSortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_key(s).as_str() {
            "next_billing_date" | "next_billing" | "date" => Ok(Self::NextBillingDate),
            "name" => Ok(Self::Name),
            "amount" => Ok(Self::Amount),
            "category" => Ok(Self::Category),
            _ => Err(Error::invalid("sort", s)),
        }
    }
}

impl Record for Subscription {
    type SortKey = SubscriptionSortKey;

    const KIND: RecordKind = RecordKind::Subscriptions;

    const EXPORT_COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "category",
        "amount",
        "billing_cycle",
        "next_billing_date",
        "is_active",
        "notes",
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.category.as_str(),
            self.notes.as_str(),
        ]
    }

    fn category(&self) -> Option<&str> {
        Some(self.category.as_str()).filter(|c| !c.is_empty())
    }

    fn date(&self) -> Option<&str> {
        self.next_billing_date.as_deref()
    }

    fn amount(&self) -> Option<f64> {
        Some(self.amount)
    }

    fn sort_value(&self, key: SubscriptionSortKey) -> SortValue<'_> {
        match key {
            SubscriptionSortKey::NextBillingDate => {
                SortValue::Date(self.next_billing_date.as_deref())
            }
            SubscriptionSortKey::Name => SortValue::Text(&self.name),
            SubscriptionSortKey::Amount => SortValue::Number(self.amount),
            SubscriptionSortKey::Category => SortValue::Ranked(&self.category),
        }
    }

    fn export_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.category.clone(),
            format!("{:.2}", self.amount),
            self.billing_cycle.clone(),
            self.next_billing_date.clone().unwrap_or_default(),
            self.is_active.to_string(),
            self.notes.clone(),
        ]
    }
}
