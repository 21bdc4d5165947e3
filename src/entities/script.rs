//! Script entity - a prepared answer for an interview question.

use super::{
    Record, RecordKind, SortValue, flexible_id, lenient_flag, normalize_key, null_as_default,
};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Interview-prep script row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Backend identifier
    #[serde(default, deserialize_with = "flexible_id")]
    pub id: String,
    /// Short label
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// The interview question being prepared for
    #[serde(default, deserialize_with = "null_as_default")]
    pub question: String,
    /// Prepared answer
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    /// Introduction, Behavioral, Technical...
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    /// User tags
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Starred by the user
    #[serde(default, deserialize_with = "lenient_flag")]
    pub is_favorite: bool,
    /// Server-assigned creation timestamp
    #[serde(default)]
    pub created_at: Option<String>,
    /// Server-assigned update timestamp
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Sort keys for scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptSortKey {
    /// Last update
    #[default]
    UpdatedAt,
    /// Title
    Title,
    /// Category, by interview flow order
    Category,
}

impl FromStr for ScriptSortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_key(s).as_str() {
            "updated_at" | "updated" => Ok(Self::UpdatedAt),
            "title" => Ok(Self::Title),
            "category" => Ok(Self::Category),
            _ => Err(Error::invalid("sort", s)),
        }
    }
}

impl Record for Script {
    type SortKey = ScriptSortKey;

    const KIND: RecordKind = RecordKind::Scripts;

    const EXPORT_COLUMNS: &'static [&'static str] =
        &["id", "title", "category", "question", "content", "tags", "is_favorite"];

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.question.as_str(),
            self.content.as_str(),
        ];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn category(&self) -> Option<&str> {
        Some(self.category.as_str()).filter(|c| !c.is_empty())
    }

    fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    fn date(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    fn sort_value(&self, key: ScriptSortKey) -> SortValue<'_> {
        match key {
            ScriptSortKey::UpdatedAt => SortValue::Date(self.updated_at.as_deref()),
            ScriptSortKey::Title => SortValue::Text(&self.title),
            ScriptSortKey::Category => SortValue::Ranked(&self.category),
        }
    }

    fn export_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.category.clone(),
            self.question.clone(),
            self.content.clone(),
            self.tags.join("; "),
            self.is_favorite.to_string(),
        ]
    }
}
