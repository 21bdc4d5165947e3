//! Aggregation stage of the derived view.
//!
//! Summaries are computed over the filtered records only. The trailing monthly
//! series lives in [`crate::core::monthly`] because it ignores the filters.

use crate::entities::Record;
use std::collections::HashMap;

/// Totals for one category/status bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketTotal {
    /// Category or status value
    pub key: String,
    /// Number of records in the bucket
    pub count: usize,
    /// Sum of the records' amounts
    pub total: f64,
}

/// Summary statistics of a derived view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    /// Number of records in the view
    pub count: usize,
    /// Sum of every record's amount
    pub total: f64,
    /// Non-empty buckets, largest total first
    pub breakdown: Vec<BucketTotal>,
}

impl Summary {
    /// Count for one bucket, zero if it is absent.
    #[must_use]
    pub fn count_for(&self, key: &str) -> usize {
        self.breakdown
            .iter()
            .find(|bucket| bucket.key == key)
            .map_or(0, |bucket| bucket.count)
    }
}

/// Summarizes a filtered view.
///
/// # Arguments
/// * `records` - The filtered (and usually sorted) view
///
/// # Returns
/// A `Summary` with the record count, the amount total and the per-category
/// breakdown. Records without a category count towards `count` and `total` but
/// not towards any bucket. Buckets are ordered by descending amount total, then
/// by descending count, then by first appearance.
pub fn summarize<R: Record>(records: &[&R]) -> Summary {
    let mut breakdown: Vec<BucketTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut total = 0.0;

    for record in records {
        let amount = record.amount().unwrap_or(0.0);
        total += amount;

        let Some(category) = record.category() else {
            continue;
        };

        let slot = *index.entry(category).or_insert_with(|| {
            breakdown.push(BucketTotal {
                key: category.to_string(),
                count: 0,
                total: 0.0,
            });
            breakdown.len() - 1
        });
        breakdown[slot].count += 1;
        breakdown[slot].total += amount;
    }

    breakdown.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then_with(|| b.count.cmp(&a.count))
    });

    Summary {
        count: records.len(),
        total,
        breakdown,
    }
}
