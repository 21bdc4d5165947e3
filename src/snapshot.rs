//! Snapshot loading - the boundary between the backend and the view engine.
//!
//! A [`RecordSource`] lists every record of a collection. Loading is the only
//! async step; the result is frozen into a [`Snapshot`] that the engine reads
//! but never changes. Reloading produces a new snapshot rather than patching
//! the old one.

use crate::entities::{Record, RecordKind};
use crate::errors::{Error, Result};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Immutable copy of a collection as of the last successful load.
#[derive(Debug)]
pub struct Snapshot<R> {
    records: Arc<[R]>,
    loaded_at: DateTime<Utc>,
}

// Manual impl: cloning shares the records and must not require `R: Clone`.
impl<R> Clone for Snapshot<R> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            loaded_at: self.loaded_at,
        }
    }
}

impl<R> Snapshot<R> {
    /// Freezes `records` into a snapshot stamped with the current time.
    #[must_use]
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records: records.into(),
            loaded_at: Utc::now(),
        }
    }

    /// Records in backend order
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the snapshot is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// When the snapshot was taken
    #[must_use]
    pub const fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

/// Something that can list every record of one collection.
pub trait RecordSource<R: Record> {
    /// Fetches the full current collection.
    fn list(&self) -> impl Future<Output = Result<Vec<R>>> + Send;
}

/// Reads a collection exported from the backend as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Source reading `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Source reading `<data_dir>/<collection>.json`
    #[must_use]
    pub fn for_kind(data_dir: &Path, kind: RecordKind) -> Self {
        Self::new(data_dir.join(format!("{}.json", kind.as_str())))
    }

    /// File this source reads
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<R: Record + Send> RecordSource<R> for JsonFileSource {
    async fn list(&self) -> Result<Vec<R>> {
        debug!("Reading {} records from {}", R::KIND, self.path.display());
        let contents = tokio::fs::read_to_string(&self.path).await?;
        parse_records(&contents)
    }
}

/// Parses a backend response body into records.
///
/// Accepts a bare JSON array or a `{ "data": [...], "error": ... }` envelope.
/// A non-null `error` is reported as [`Error::Source`]; a `null` `data` is an
/// empty collection. Rows that still fail to deserialize after the lenient
/// column handling are skipped with a warning.
pub fn parse_records<R: DeserializeOwned>(contents: &str) -> Result<Vec<R>> {
    match serde_json::from_str::<Value>(contents)? {
        Value::Array(rows) => Ok(parse_rows(rows)),
        Value::Object(mut envelope) => {
            if let Some(error) = envelope.remove("error").filter(|e| !e.is_null()) {
                let message = error
                    .get("message")
                    .and_then(Value::as_str)
                    .map_or_else(|| error.to_string(), str::to_string);
                return Err(Error::Source { message });
            }
            match envelope.remove("data") {
                Some(Value::Null) | None => Ok(Vec::new()),
                Some(Value::Array(rows)) => Ok(parse_rows(rows)),
                Some(other) => Err(Error::Source {
                    message: format!("expected `data` to be an array of records, found {other}"),
                }),
            }
        }
        other => Err(Error::Source {
            message: format!("expected a JSON array of records, found {other}"),
        }),
    }
}

fn parse_rows<R: DeserializeOwned>(rows: Vec<Value>) -> Vec<R> {
    let total = rows.len();
    let records: Vec<R> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| {
            serde_json::from_value(row)
                .inspect_err(|e| warn!("Skipping malformed record at index {index}: {e}"))
                .ok()
        })
        .collect();
    if records.len() < total {
        warn!("Skipped {} of {total} records", total - records.len());
    }
    records
}

/// Lists every record from `source` and freezes them into a snapshot.
pub async fn load_snapshot<R, S>(source: &S) -> Result<Snapshot<R>>
where
    R: Record,
    S: RecordSource<R>,
{
    let records = source.list().await?;
    info!("Loaded {} {} records", records.len(), R::KIND);
    Ok(Snapshot::new(records))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::{Application, Expense};
    use std::fs;
    use tempfile::tempdir;

    struct StaticSource(Vec<Application>);

    impl RecordSource<Application> for StaticSource {
        async fn list(&self) -> Result<Vec<Application>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_parse_bare_array() {
        let apps: Vec<Application> =
            parse_records(r#"[{"id": "1", "company": "Hooli"}, {"id": "2"}]"#).unwrap();
        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0].company, "Hooli");
    }

    #[test]
    fn test_parse_envelope() {
        let apps: Vec<Application> =
            parse_records(r#"{"data": [{"id": "1"}], "error": null}"#).unwrap();
        assert_eq!(apps.len(), 1);

        let apps: Vec<Application> = parse_records(r#"{"data": null}"#).unwrap();
        assert!(apps.is_empty());
    }

    #[test]
    fn test_parse_envelope_error() {
        let result: Result<Vec<Application>> = parse_records(
            r#"{"data": null, "error": {"message": "JWT expired", "code": "PGRST301"}}"#,
        );
        assert!(matches!(
            result,
            Err(Error::Source { ref message }) if message == "JWT expired"
        ));
    }

    #[test]
    fn test_parse_rejects_scalars_and_bad_json() {
        assert!(matches!(
            parse_records::<Application>("42"),
            Err(Error::Source { .. })
        ));
        assert!(matches!(
            parse_records::<Application>("[{"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_numeric_strings_do_not_fail_the_load() {
        let expenses: Vec<Expense> = parse_records(
            r#"[
                {"id": 1, "description": "Rent", "amount": 900},
                {"id": 2, "description": "Lunch", "amount": "12.50"},
                {"id": 3, "description": "Gift", "amount": "n/a"}
            ]"#,
        )
        .unwrap();

        assert_eq!(expenses.len(), 3);
        assert!((expenses[1].amount - 12.5).abs() < f64::EPSILON);
        assert!(expenses[2].amount.abs() < f64::EPSILON);
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let apps: Vec<Application> = parse_records(
            r#"{"data": [
                {"id": "1", "company": "Hooli"},
                "not a record",
                {"id": "3", "company": ["Initech"]},
                {"id": "4", "company": "Globex"}
            ]}"#,
        )
        .unwrap();

        let ids: Vec<&str> = apps.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["1", "4"]);
    }

    #[test]
    fn test_envelope_data_must_be_an_array() {
        assert!(matches!(
            parse_records::<Application>(r#"{"data": {"id": "1"}}"#),
            Err(Error::Source { .. })
        ));
    }

    #[test]
    fn test_snapshot_clone_shares_records() {
        let snapshot = Snapshot::new(vec![Application::default()]);
        let copy = snapshot.clone();
        assert_eq!(copy.len(), 1);
        assert!(std::ptr::eq(snapshot.records(), copy.records()));
        assert_eq!(copy.loaded_at(), snapshot.loaded_at());
    }

    #[tokio::test]
    async fn test_load_snapshot_from_source() -> Result<()> {
        let source = StaticSource(vec![Application::default(), Application::default()]);
        let snapshot = load_snapshot(&source).await?;
        assert_eq!(snapshot.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_json_file_source_reads_collection() -> Result<()> {
        let tmp = tempdir().unwrap();
        fs::write(
            tmp.path().join("expenses.json"),
            r#"[{"id": 1, "description": "Rent", "amount": 900, "date": "2024-01-01"}]"#,
        )
        .unwrap();
        let source = JsonFileSource::for_kind(tmp.path(), RecordKind::Expenses);

        let snapshot: Snapshot<Expense> = load_snapshot(&source).await?;
        assert_eq!(snapshot.records()[0].description, "Rent");
        Ok(())
    }

    #[tokio::test]
    async fn test_json_file_source_missing_file_is_io_error() {
        let tmp = tempdir().unwrap();
        let source = JsonFileSource::for_kind(tmp.path(), RecordKind::Applications);
        let result: Result<Snapshot<Application>> = load_snapshot(&source).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_source_path_for_kind() {
        let source = JsonFileSource::for_kind(Path::new("data"), RecordKind::Loans);
        assert_eq!(source.path(), Path::new("data/loans.json"));
    }
}
