//! Trailing monthly series.
//!
//! Produces the twelve-month spending history shown next to the expense view.
//! The series is always computed from the full snapshot: filters narrow the
//! list and its summary, never the history.

use crate::entities::Record;
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

/// Number of months in a trailing series
pub const SERIES_MONTHS: usize = 12;

/// Sum of one month's records.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthTotal {
    /// `YYYY-MM`
    pub month: String,
    /// Sum of amounts dated in this month
    pub total: f64,
    /// Number of records dated in this month
    pub count: usize,
}

/// `YYYY-MM` keys of the twelve months ending with `today`'s month, oldest first.
#[must_use]
// Cast safety: SERIES_MONTHS is 12.
#[allow(clippy::cast_possible_wrap)]
pub fn trailing_months(today: NaiveDate) -> Vec<String> {
    let current = i64::from(today.year()) * 12 + i64::from(today.month0());
    (0..SERIES_MONTHS as i64)
        .rev()
        .map(|back| {
            let index = current - back;
            format!("{:04}-{:02}", index.div_euclid(12), index.rem_euclid(12) + 1)
        })
        .collect()
}

/// Per-month totals for the twelve months ending with `today`'s month.
///
/// Pass the whole snapshot, not a filtered view: the series is meant to show
/// the full history whatever filters are active.
///
/// # Arguments
/// * `records` - Every record in the snapshot
/// * `today` - Date whose month ends the series
///
/// # Returns
/// Exactly twelve `MonthTotal`s, oldest first. Months without records are zero;
/// records with a missing or malformed date are ignored.
pub fn monthly_series<R: Record>(records: &[R], today: NaiveDate) -> Vec<MonthTotal> {
    let mut series: Vec<MonthTotal> = trailing_months(today)
        .into_iter()
        .map(|month| MonthTotal {
            month,
            total: 0.0,
            count: 0,
        })
        .collect();

    let slots: HashMap<String, usize> = series
        .iter()
        .enumerate()
        .map(|(slot, entry)| (entry.month.clone(), slot))
        .collect();

    for record in records {
        let Some(slot) = record
            .date()
            .and_then(|date| date.get(..7))
            .and_then(|month| slots.get(month))
        else {
            continue;
        };
        series[*slot].total += record.amount().unwrap_or(0.0);
        series[*slot].count += 1;
    }

    series
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::filter::filter_records;
    use crate::core::params::{CategoryFilter, ViewParams};
    use crate::entities::{Expense, ExpenseSortKey};
    use crate::test_utils::*;
    use std::collections::HashSet;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_trailing_months_wraps_year() {
        let months = trailing_months(day(2024, 3, 15));
        assert_eq!(months.len(), 12);
        assert_eq!(months[0], "2023-04");
        assert_eq!(months[9], "2024-01");
        assert_eq!(months[11], "2024-03");
    }

    #[test]
    fn test_trailing_months_december() {
        let months = trailing_months(day(2024, 12, 31));
        assert_eq!(months[0], "2024-01");
        assert_eq!(months[11], "2024-12");
    }

    #[test]
    fn test_series_has_twelve_distinct_months_ending_now() {
        let series = monthly_series::<Expense>(&[], day(2025, 1, 1));
        assert_eq!(series.len(), SERIES_MONTHS);
        let distinct: HashSet<&str> = series.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(distinct.len(), SERIES_MONTHS);
        assert_eq!(series.last().unwrap().month, "2025-01");
        assert!(series.iter().all(|m| m.total == 0.0 && m.count == 0));
    }

    #[test]
    fn test_series_sums_by_month() {
        let expenses = vec![
            expense("1", "Rent", "Housing", 1000.0, "2024-03-01"),
            expense("2", "Lunch", "Food", 12.5, "2024-03-20"),
            expense("3", "Flight", "Travel", 300.0, "2024-01-05"),
            expense("4", "Old", "Other", 99.0, "2022-01-05"),
            expense("5", "Undated", "Other", 1.0, ""),
        ];

        let series = monthly_series(&expenses, day(2024, 3, 31));
        let march = series.iter().find(|m| m.month == "2024-03").unwrap();
        assert_eq!(march.total, 1012.5);
        assert_eq!(march.count, 2);

        let january = series.iter().find(|m| m.month == "2024-01").unwrap();
        assert_eq!(january.total, 300.0);

        let february = series.iter().find(|m| m.month == "2024-02").unwrap();
        assert_eq!(february.total, 0.0);

        let grand_total: f64 = series.iter().map(|m| m.total).sum();
        assert_eq!(grand_total, 1312.5);
    }

    #[test]
    fn test_series_ignores_active_filters() {
        let expenses = vec![
            expense("1", "Rent", "Housing", 1000.0, "2024-03-01"),
            expense("2", "Lunch", "Food", 12.5, "2024-03-20"),
        ];
        let params = ViewParams::<ExpenseSortKey>::default()
            .with_category(CategoryFilter::Only("Food".to_string()));
        let filtered = filter_records(&expenses, &params);
        assert_eq!(filtered.len(), 1);

        let series = monthly_series(&expenses, day(2024, 3, 31));
        assert_eq!(series.last().unwrap().total, 1012.5);
    }
}
