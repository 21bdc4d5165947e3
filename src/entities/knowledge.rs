//! Knowledge entity - a note in the personal knowledge base.

use super::{
    Record, RecordKind, SortValue, flexible_id, lenient_flag, normalize_key, null_as_default,
};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Knowledge base entry row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    /// Backend identifier
    #[serde(default, deserialize_with = "flexible_id")]
    pub id: String,
    /// Entry title
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Markdown body
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    /// Topic (Frontend, Backend, ...)
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    /// User tags
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Where the knowledge came from
    #[serde(default)]
    pub source_url: Option<String>,
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

/// Sort keys for knowledge entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KnowledgeSortKey {
    /// Last update
    #[default]
    UpdatedAt,
    /// Title
    Title,
    /// Topic, by configured order
    Category,
    /// Creation time
    CreatedAt,
}

impl FromStr for KnowledgeSortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_key(s).as_str() {
            "updated_at" | "updated" => Ok(Self::UpdatedAt),
            "title" => Ok(Self::Title),
            "category" => Ok(Self::Category),
            "created_at" | "created" => Ok(Self::CreatedAt),
            _ => Err(Error::invalid("sort", s)),
        }
    }
}

impl Record for KnowledgeEntry {
    type SortKey = KnowledgeSortKey;

    const KIND: RecordKind = RecordKind::Knowledge;

    const EXPORT_COLUMNS: &'static [&'static str] = &[
        "id",
        "title",
        "category",
        "tags",
        "source_url",
        "is_favorite",
        "created_at",
        "updated_at",
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.content.as_str(),
            self.category.as_str(),
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

    fn sort_value(&self, key: KnowledgeSortKey) -> SortValue<'_> {
        match key {
            KnowledgeSortKey::UpdatedAt => SortValue::Date(self.updated_at.as_deref()),
            KnowledgeSortKey::Title => SortValue::Text(&self.title),
            KnowledgeSortKey::Category => SortValue::Ranked(&self.category),
            KnowledgeSortKey::CreatedAt => SortValue::Date(self.created_at.as_deref()),
        }
    }

    fn export_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.category.clone(),
            self.tags.join("; "),
            self.source_url.clone().unwrap_or_default(),
            self.is_favorite.to_string(),
            self.created_at.clone().unwrap_or_default(),
            self.updated_at.clone().unwrap_or_default(),
        ]
    }
}
