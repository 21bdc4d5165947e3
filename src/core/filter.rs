//! Filtering stage of the derived view.
//!
//! Checks run in a fixed order and stop at the first failure: category,
//! favorite, time bucket, then the free-text query. The output keeps the
//! input order.

use super::params::ViewParams;
use crate::entities::Record;

/// Returns the records that pass every active filter, in their original order.
///
/// # Arguments
/// * `records` - A snapshot slice or the output of a previous filter
/// * `params` - Current view parameters; only the filter fields are read
///
/// # Returns
/// The passing subsequence. Filtering it again with the same `params` returns
/// it unchanged.
pub fn filter_records<'a, R, I>(records: I, params: &ViewParams<R::SortKey>) -> Vec<&'a R>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let needle = params.query.to_lowercase();
    records
        .into_iter()
        .filter(|record| passes(*record, params, &needle))
        .collect()
}

fn passes<R: Record>(record: &R, params: &ViewParams<R::SortKey>, needle: &str) -> bool {
    if !params.category.matches(record.category()) {
        return false;
    }

    if params.favorite_only && !record.is_favorite() {
        return false;
    }

    if params
        .time_bucket
        .as_ref()
        .is_some_and(|bucket| !bucket.contains(record.date()))
    {
        return false;
    }

    needle.is_empty() || matches_query(record, needle)
}

/// Case-insensitive substring match against the record's searchable fields.
///
/// `needle` must already be lower-cased.
fn matches_query<R: Record>(record: &R, needle: &str) -> bool {
    record
        .searchable_fields()
        .into_iter()
        .any(|field| !field.is_empty() && field.to_lowercase().contains(needle))
}
