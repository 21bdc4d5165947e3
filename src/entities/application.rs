//! Application entity - a job application moving through the hiring pipeline.
//!
//! The `status` column is the pipeline stage (Applied, Screening, Interview, ...);
//! it sorts by the configured pipeline order rather than alphabetically.

use super::{
    Record, RecordKind, SortValue, flexible_id, lenient_flag, normalize_key, null_as_default,
};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Job application row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// Backend identifier
    #[serde(default, deserialize_with = "flexible_id")]
    pub id: String,
    /// Company name
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    /// Role applied for
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: String,
    /// Pipeline stage
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    /// Office location or "Remote"
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    /// Link to the posting
    #[serde(default)]
    pub job_url: Option<String>,
    /// Advertised salary range, free text
    #[serde(default)]
    pub salary_range: Option<String>,
    /// Date the application was sent (`YYYY-MM-DD`)
    #[serde(default)]
    pub applied_date: Option<String>,
    /// Recruiter or referral contact
    #[serde(default)]
    pub contact: Option<String>,
    /// Free-form notes
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
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

/// Sort keys for applications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApplicationSortKey {
    /// Date applied
    #[default]
    AppliedDate,
    /// Company name
    Company,
    /// Role
    Position,
    /// Pipeline stage, by pipeline order
    Status,
    /// Last update
    UpdatedAt,
}

impl FromStr for ApplicationSortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_key(s).as_str() {
            "applied_date" | "date" => Ok(Self::AppliedDate),
            "company" => Ok(Self::Company),
            "position" | "role" => Ok(Self::Position),
            "status" => Ok(Self::Status),
            "updated_at" | "updated" => Ok(Self::UpdatedAt),
            _ => Err(Error::invalid("sort", s)),
        }
    }
}

impl Record for Application {
    type SortKey = ApplicationSortKey;

    const KIND: RecordKind = RecordKind::Applications;

    const EXPORT_COLUMNS: &'static [&'static str] = &[
        "id",
        "company",
        "position",
        "status",
        "location",
        "applied_date",
        "salary_range",
        "job_url",
        "tags",
        "notes",
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.company
    }

    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.company.as_str(),
            self.position.as_str(),
            self.location.as_str(),
            self.notes.as_str(),
        ];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn category(&self) -> Option<&str> {
        Some(self.status.as_str()).filter(|s| !s.is_empty())
    }

    fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    fn date(&self) -> Option<&str> {
        self.applied_date.as_deref()
    }

    fn sort_value(&self, key: ApplicationSortKey) -> SortValue<'_> {
        match key {
            ApplicationSortKey::AppliedDate => SortValue::Date(self.applied_date.as_deref()),
            ApplicationSortKey::Company => SortValue::Text(&self.company),
            ApplicationSortKey::Position => SortValue::Text(&self.position),
            ApplicationSortKey::Status => SortValue::Ranked(&self.status),
            ApplicationSortKey::UpdatedAt => SortValue::Date(self.updated_at.as_deref()),
        }
    }

    fn export_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.company.clone(),
            self.position.clone(),
            self.status.clone(),
            self.location.clone(),
            self.applied_date.clone().unwrap_or_default(),
            self.salary_range.clone().unwrap_or_default(),
            self.job_url.clone().unwrap_or_default(),
            self.tags.join("; "),
            self.notes.clone(),
        ]
    }
}
