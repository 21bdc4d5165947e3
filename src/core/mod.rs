//! Core view logic - framework-agnostic and free of I/O.
//!
//! The pipeline is filter, then sort, then aggregate, always over an immutable
//! snapshot. Reporting, export and finance helpers consume the derived view.

pub mod aggregate;
pub mod engine;
pub mod export;
pub mod filter;
pub mod finance;
pub mod monthly;
pub mod params;
pub mod report;
pub mod session;
pub mod sort;

pub use aggregate::{BucketTotal, Summary, summarize};
pub use engine::{DerivedView, ViewEngine};
pub use filter::filter_records;
pub use monthly::{MonthTotal, monthly_series};
pub use params::{CategoryFilter, SortDirection, TimeBucket, ViewParams};
pub use session::{RenderedView, ViewSession};
pub use sort::sort_records;
