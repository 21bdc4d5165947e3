//! The derived-view engine: `aggregate(sort(filter(records, params)))`.
//!
//! One generic engine serves every collection. What differs between
//! collections (searchable fields, sort-key values, the enumerated field) comes
//! from the [`Record`] implementation; the domain ordering array is held here.

use super::aggregate::{Summary, summarize};
use super::filter::filter_records;
use super::monthly::{MonthTotal, monthly_series};
use super::params::{SortDirection, ViewParams};
use super::sort::sort_records;
use crate::config::AppConfig;
use crate::entities::Record;
use chrono::NaiveDate;
use std::marker::PhantomData;

/// Records to display plus their summary.
#[derive(Debug, Clone)]
pub struct DerivedView<'a, R> {
    /// Filtered and sorted records, borrowed from the snapshot
    pub records: Vec<&'a R>,
    /// Summary over `records`
    pub summary: Summary,
}

impl<R> DerivedView<'_, R> {
    /// Number of records in the view
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the view is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Derived-view engine for one record collection.
#[derive(Debug, Clone)]
pub struct ViewEngine<R> {
    order: Vec<String>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> ViewEngine<R> {
    /// Engine using `order` as the domain ordering array.
    #[must_use]
    pub const fn new(order: Vec<String>) -> Self {
        Self {
            order,
            _record: PhantomData,
        }
    }

    /// Engine using the ordering array configured for `R`'s collection.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.orders.for_kind(R::KIND).to_vec())
    }

    /// Filtering stage, see [`filter_records`].
    pub fn filter<'a>(&self, records: &'a [R], params: &ViewParams<R::SortKey>) -> Vec<&'a R> {
        filter_records(records, params)
    }

    /// Sorting stage, see [`sort_records`].
    pub fn sort<'a>(
        &self,
        records: Vec<&'a R>,
        key: R::SortKey,
        direction: SortDirection,
    ) -> Vec<&'a R> {
        sort_records(records, key, direction, &self.order)
    }

    /// Aggregation stage, see [`summarize`].
    pub fn aggregate(&self, records: &[&R]) -> Summary {
        summarize(records)
    }

    /// Runs the whole pipeline over a snapshot.
    pub fn derive<'a>(
        &self,
        records: &'a [R],
        params: &ViewParams<R::SortKey>,
    ) -> DerivedView<'a, R> {
        let filtered = self.filter(records, params);
        let sorted = self.sort(filtered, params.sort_key, params.direction);
        let summary = self.aggregate(&sorted);
        DerivedView {
            records: sorted,
            summary,
        }
    }

    /// Trailing twelve-month series over the full, unfiltered snapshot.
    pub fn monthly_series(&self, records: &[R], today: NaiveDate) -> Vec<MonthTotal> {
        monthly_series(records, today)
    }
}
