use crate::errors::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::str::FromStr;

/// Value a record exposes for one sort key.
///
/// The variant decides the comparator used by [`crate::core::sort`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    /// Free text, compared case-folded first and then exactly
    Text(&'a str),
    /// Enumerated value, compared by its index in the domain ordering array
    Ranked(&'a str),
    /// ISO-8601 date or timestamp, compared as a string; `None` sorts first
    Date(Option<&'a str>),
    /// Numeric value
    Number(f64),
}

/// A persisted domain entity the view engine can filter, sort and aggregate.
///
/// Accessors return borrowed, possibly empty values; a missing field is never
/// an error, it simply does not match.
pub trait Record: DeserializeOwned + Serialize {
    /// Sort keys the collection supports. `Default` is the key a fresh view uses.
    type SortKey: Copy + Eq + Default + fmt::Debug + FromStr<Err = Error>;

    /// Which collection this record belongs to
    const KIND: RecordKind;

    /// Column headers for CSV export, in the order of [`Record::export_row`]
    const EXPORT_COLUMNS: &'static [&'static str];

    /// Backend identifier
    fn id(&self) -> &str;

    /// Short human label used for one-line rendering
    fn title(&self) -> &str;

    /// Fields the free-text query is matched against
    fn searchable_fields(&self) -> Vec<&str>;

    /// Enumerated category or status, if the record has one set
    fn category(&self) -> Option<&str> {
        None
    }

    /// Whether the record is marked as a favorite
    fn is_favorite(&self) -> bool {
        false
    }

    /// Date field used for time-bucket filtering and monthly series
    fn date(&self) -> Option<&str> {
        None
    }

    /// Amount summed by aggregation
    fn amount(&self) -> Option<f64> {
        None
    }

    /// Value compared when sorting by `key`
    fn sort_value(&self, key: Self::SortKey) -> SortValue<'_>;

    /// Cells for CSV export
    fn export_row(&self) -> Vec<String>;
}

/// The tracked collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Job applications
    Applications,
    /// Expenses
    Expenses,
    /// Recurring subscriptions
    Subscriptions,
    /// Loans and credit lines
    Loans,
    /// Knowledge base entries
    Knowledge,
    /// Interview-prep scripts
    Scripts,
    /// Todo items
    Todos,
}

impl RecordKind {
    /// Every collection, in display order
    pub const ALL: [Self; 7] = [
        Self::Applications,
        Self::Expenses,
        Self::Subscriptions,
        Self::Loans,
        Self::Knowledge,
        Self::Scripts,
        Self::Todos,
    ];

    /// Canonical name, also the snapshot file stem
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Applications => "applications",
            Self::Expenses => "expenses",
            Self::Subscriptions => "subscriptions",
            Self::Loans => "loans",
            Self::Knowledge => "knowledge",
            Self::Scripts => "scripts",
            Self::Todos => "todos",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| {
                let canonical = kind.as_str();
                name == canonical || canonical.strip_suffix('s') == Some(name.as_str())
            })
            .ok_or_else(|| Error::invalid("collection", s))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_record_kind_parses_plural_and_singular() {
        assert_eq!("applications".parse::<RecordKind>().unwrap(), RecordKind::Applications);
        assert_eq!("Expense".parse::<RecordKind>().unwrap(), RecordKind::Expenses);
        assert_eq!("knowledge".parse::<RecordKind>().unwrap(), RecordKind::Knowledge);
    }

    #[test]
    fn test_record_kind_rejects_unknown() {
        let err = "invoices".parse::<RecordKind>().unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "collection", .. }));
    }

    #[test]
    fn test_record_kind_display_matches_file_stem() {
        for kind in RecordKind::ALL {
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }
}
