//! Todo entity - a task with a priority and an optional due date.

use super::{
    Record, RecordKind, SortValue, flexible_id, lenient_flag, normalize_key, null_as_default,
};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Todo row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Backend identifier
    #[serde(default, deserialize_with = "flexible_id")]
    pub id: String,
    /// What needs doing
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Extra detail
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// High, Medium, Low
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: String,
    /// Done flag
    #[serde(default, deserialize_with = "lenient_flag")]
    pub completed: bool,
    /// Due date (`YYYY-MM-DD`)
    #[serde(default)]
    pub due_date: Option<String>,
    /// Server-assigned creation timestamp
    #[serde(default)]
    pub created_at: Option<String>,
    /// Server-assigned update timestamp
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Sort keys for todos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoSortKey {
    /// Due date
    #[default]
    DueDate,
    /// Title
    Title,
    /// Priority, by configured order
    Priority,
    /// Creation time
    CreatedAt,
}

impl FromStr for TodoSortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_key(s).as_str() {
            "due_date" | "due" | "date" => Ok(Self::DueDate),
            "title" => Ok(Self::Title),
            "priority" => Ok(Self::Priority),
            "created_at" | "created" => Ok(Self::CreatedAt),
            _ => Err(Error::invalid("sort", s)),
        }
    }
}

impl Record for Todo {
    type SortKey = TodoSortKey;

    const KIND: RecordKind = RecordKind::Todos;

    const EXPORT_COLUMNS: &'static [&'static str] =
        &["id", "title", "priority", "completed", "due_date", "description"];

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn category(&self) -> Option<&str> {
        Some(self.priority.as_str()).filter(|p| !p.is_empty())
    }

    fn date(&self) -> Option<&str> {
        self.due_date.as_deref()
    }

    fn sort_value(&self, key: TodoSortKey) -> SortValue<'_> {
        match key {
            TodoSortKey::DueDate => SortValue::Date(self.due_date.as_deref()),
            TodoSortKey::Title => SortValue::Text(&self.title),
            TodoSortKey::Priority => SortValue::Ranked(&self.priority),
            TodoSortKey::CreatedAt => SortValue::Date(self.created_at.as_deref()),
        }
    }

    fn export_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.priority.clone(),
            self.completed.to_string(),
            self.due_date.clone().unwrap_or_default(),
            self.description.clone(),
        ]
    }
}
