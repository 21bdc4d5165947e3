//! View parameters - the user-controlled half of a derived view.
//!
//! Parameters are plain values. Nothing in the engine holds on to them; a
//! caller that wants "current parameters" keeps them in a
//! [`crate::core::session::ViewSession`].

use crate::errors::{Error, Result};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Category/status filter: either the `All` sentinel or one domain value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category filtering
    #[default]
    All,
    /// Only records whose category equals this value
    Only(String),
}

impl CategoryFilter {
    /// Builds a filter from user input; empty input and `All` mean no filtering.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(trimmed.to_string())
        }
    }

    /// Whether a record with `category` passes this filter.
    #[must_use]
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => category == Some(wanted.as_str()),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest first
    Asc,
    /// Largest (newest) first
    #[default]
    Desc,
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            _ => Err(Error::invalid("direction", s)),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

/// A calendar month, `YYYY-MM`.
///
/// Records match a bucket when their date field starts with it, so both
/// `2024-03-15` and `2024-03-15T08:00:00Z` fall in `2024-03`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeBucket(String);

impl TimeBucket {
    /// Bucket containing `date`.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self(format!("{:04}-{:02}", date.year(), date.month()))
    }

    /// The `YYYY-MM` key
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a date string falls in this month.
    #[must_use]
    pub fn contains(&self, date: Option<&str>) -> bool {
        date.is_some_and(|d| d.starts_with(self.0.as_str()))
    }
}

impl FromStr for TimeBucket {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let valid = trimmed.len() == 7
            && NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d").is_ok();
        if valid {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(Error::invalid("month", s))
        }
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the user can adjust about a view.
///
/// `K` is the sort key type of the record collection being viewed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewParams<K> {
    /// Free-text query; empty matches everything
    pub query: String,
    /// Category/status filter
    pub category: CategoryFilter,
    /// Only favorited records
    pub favorite_only: bool,
    /// Field to sort by
    pub sort_key: K,
    /// Sort direction
    pub direction: SortDirection,
    /// Month the record's date must fall in
    pub time_bucket: Option<TimeBucket>,
}

impl<K: Default> Default for ViewParams<K> {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: CategoryFilter::All,
            favorite_only: false,
            sort_key: K::default(),
            direction: SortDirection::default(),
            time_bucket: None,
        }
    }
}

impl<K> ViewParams<K> {
    /// Sets the free-text query.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Sets the category filter.
    #[must_use]
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Restricts the view to favorites.
    #[must_use]
    pub const fn favorites_only(mut self, favorite_only: bool) -> Self {
        self.favorite_only = favorite_only;
        self
    }

    /// Sets the sort key and direction.
    #[must_use]
    pub fn sorted_by(mut self, sort_key: K, direction: SortDirection) -> Self {
        self.sort_key = sort_key;
        self.direction = direction;
        self
    }

    /// Restricts the view to one month.
    #[must_use]
    pub fn in_month(mut self, bucket: Option<TimeBucket>) -> Self {
        self.time_bucket = bucket;
        self
    }

    /// Whether any filter axis is away from its idle value.
    #[must_use]
    pub fn is_filtering(&self) -> bool {
        !self.query.is_empty()
            || self.category != CategoryFilter::All
            || self.favorite_only
            || self.time_bucket.is_some()
    }

    /// Resets every filter axis to idle; the sort is kept.
    pub fn clear_filters(&mut self) {
        self.query.clear();
        self.category = CategoryFilter::All;
        self.favorite_only = false;
        self.time_bucket = None;
    }
}
