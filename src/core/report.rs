//! Report formatting.
//!
//! Turns derived views, summaries and monthly series into plain text for the
//! terminal. All functions are pure and return `String`s; printing is left to
//! the caller.

use super::aggregate::Summary;
use super::monthly::MonthTotal;
use crate::entities::Record;

/// Formats an amount as dollars, e.g. `$1234.50` or `-$12.00`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${amount:.2}")
    }
}

/// Text bar for `value` relative to `max`: `[████░░░░░░]`.
///
/// Values are clamped to `0..=max`; a non-positive `max` draws an empty bar.
#[must_use]
pub fn format_bar(value: f64, max: f64, length: usize) -> String {
    let ratio = if max > 0.0 {
        (value / max).clamp(0.0, 1.0)
    } else {
        0.0
    };

    // Cast safety: ratio ∈ [0, 1] and length is a small display width.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let filled = (ratio * length as f64).round() as usize;
    let empty = length.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

/// One line describing a record: title, category, date and amount when present.
pub fn format_row<R: Record>(record: &R) -> String {
    let mut parts = vec![if record.title().is_empty() {
        format!("(untitled {})", record.id())
    } else {
        record.title().to_string()
    }];

    if let Some(category) = record.category() {
        parts.push(category.to_string());
    }
    if let Some(date) = record.date().filter(|d| !d.is_empty()) {
        parts.push(date.get(..10).unwrap_or(date).to_string());
    }
    if let Some(amount) = record.amount() {
        parts.push(format_currency(amount));
    }
    if record.is_favorite() {
        parts.push("★".to_string());
    }

    parts.join(" | ")
}

/// Multi-line summary: count, total and the category breakdown.
#[must_use]
pub fn format_summary(summary: &Summary, with_amounts: bool) -> String {
    let mut text = if with_amounts {
        format!(
            "{} records | Total: {}\n",
            summary.count,
            format_currency(summary.total)
        )
    } else {
        format!("{} records\n", summary.count)
    };

    for bucket in &summary.breakdown {
        let line = if with_amounts {
            format!(
                "  {}: {} ({})\n",
                bucket.key,
                format_currency(bucket.total),
                bucket.count
            )
        } else {
            format!("  {}: {}\n", bucket.key, bucket.count)
        };
        text.push_str(&line);
    }

    text
}

/// One line per month with a bar scaled to the largest month.
#[must_use]
pub fn format_series(series: &[MonthTotal]) -> String {
    let max = series.iter().map(|m| m.total).fold(0.0_f64, f64::max);

    series
        .iter()
        .map(|month| {
            format!(
                "{} {} {}\n",
                month.month,
                format_bar(month.total, max, 20),
                format_currency(month.total)
            )
        })
        .collect()
}
