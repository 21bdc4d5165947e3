//! Sorting stage of the derived view.
//!
//! The comparator is chosen by the [`SortValue`] variant a record returns for
//! the active key. Sorting is stable: records with equal keys keep the order
//! they had in the snapshot, in both directions.

use super::params::SortDirection;
use crate::entities::{Record, SortValue};
use std::cmp::Ordering;
use std::collections::HashMap;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Position of each value in a domain ordering array.
///
/// Values missing from the array rank after every listed value.
#[derive(Debug, Clone)]
pub struct RankTable<'o> {
    ranks: HashMap<&'o str, usize>,
    unknown: usize,
}

impl<'o> RankTable<'o> {
    /// Builds the table; the first occurrence of a duplicated value wins.
    #[must_use]
    pub fn new(order: &'o [String]) -> Self {
        let mut ranks = HashMap::with_capacity(order.len());
        for (index, value) in order.iter().enumerate() {
            ranks.entry(value.as_str()).or_insert(index);
        }
        Self {
            ranks,
            unknown: order.len(),
        }
    }

    /// Rank of `value`
    #[must_use]
    pub fn rank(&self, value: &str) -> usize {
        self.ranks.get(value).copied().unwrap_or(self.unknown)
    }
}

/// Collation-style text comparison.
///
/// Compares in three levels: base letters (accents stripped, case folded), then
/// accents, then case. `Émile` sorts between `Alpha` and `Zeta`, `emile` before
/// `émile`, and `apple` before `Apple`.
#[must_use]
pub fn compare_text(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| b.cmp(a))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfc().flat_map(char::to_lowercase)
}

/// Ascending comparison of two sort values.
///
/// Values of different variants never come from the same key; they compare equal.
#[must_use]
pub fn compare_values(a: &SortValue<'_>, b: &SortValue<'_>, ranks: &RankTable<'_>) -> Ordering {
    match (a, b) {
        (SortValue::Text(a), SortValue::Text(b)) => compare_text(a, b),
        (SortValue::Ranked(a), SortValue::Ranked(b)) => ranks.rank(a).cmp(&ranks.rank(b)),
        (SortValue::Date(a), SortValue::Date(b)) => a.cmp(b),
        (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
        _ => Ordering::Equal,
    }
}

/// Sorts a filtered view by `key` in `direction`.
///
/// # Arguments
/// * `records` - Filtered view, in snapshot order
/// * `key` - Sort key; its [`SortValue`] variant picks the comparator
/// * `direction` - `Desc` reverses the ascending comparator
/// * `order` - Domain ordering array used by ranked keys
///
/// # Returns
/// The same records reordered. Records with equal keys keep their input order.
pub fn sort_records<'a, R: Record>(
    mut records: Vec<&'a R>,
    key: R::SortKey,
    direction: SortDirection,
    order: &[String],
) -> Vec<&'a R> {
    let ranks = RankTable::new(order);
    records.sort_by(|a, b| {
        let ordering = compare_values(&a.sort_value(key), &b.sort_value(key), &ranks);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    records
}
