//! Reporting views over transactions and activities.
//!
//! Aggregation and filtering are pure functions over snapshots fetched once
//! per request; the HTTP handlers in this module only glue them to the store.

mod aggregation;
mod filter;
mod handlers;

pub use aggregation::{
    DailyBalance, Summary, Timeframe, TimeframeBucket, bucket_by_day, group_by_timeframe,
    summarize,
};
pub use filter::{MonthQuery, Timestamped, by_activity_status, by_month};
pub use handlers::{get_daily_report, get_summary_report, get_timeframe_report};
