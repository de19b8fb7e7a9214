//! Daily temperature records and their monthly aggregation.
//!
//! This crate provides:
//! - `daily_record`: one parsed row of the source table
//! - `month_summary`: the `(year, month)` key and the per-month aggregate
//! - `dataset`: the selected window of years, grouped into month summaries
//! - `loader`: CSV parsing from strings, bytes, files or (with `api`) URLs
//! - `error`: the fatal load error type

pub mod daily_record;
pub mod dataset;
pub mod error;
pub mod loader;
pub mod month_summary;

pub use daily_record::DailyRecord;
pub use dataset::Dataset;
pub use error::LoadError;
pub use loader::LoadReport;
pub use month_summary::{MonthKey, MonthSummary};

/// Number of most recent years shown in the matrix.
pub const YEARS_COUNT: usize = 10;

/// Date format of the `date` column: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";
