//! Transaction and activity aggregation for reports and charts.
//!
//! Provides functions to bucket records by calendar day or month, compute
//! running balances, and summarize totals per category. All functions are
//! pure: they never touch the store and never mutate their inputs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    activity::Activity,
    transaction::{Category, Transaction},
};

/// One calendar day of money flow, with the balance carried up to that day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyBalance {
    /// The calendar day.
    pub date: Date,
    /// The magnitude of revenue recorded on this day.
    pub revenue_total: f64,
    /// The magnitude of expenses recorded on this day.
    pub expense_total: f64,
    /// Cumulative net (revenue − expense) from the first day up to and
    /// including this one.
    pub running_balance: f64,
}

/// Totals over a set of transactions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    /// The sum of revenue magnitudes.
    pub revenue_total: f64,
    /// The sum of expense magnitudes.
    pub expense_total: f64,
    /// `revenue_total − expense_total`; negative for a net loss.
    pub net_balance: f64,
    /// How many revenue transactions were counted.
    pub revenue_count: usize,
    /// How many expense transactions were counted.
    pub expense_count: usize,
}

/// The reporting window presets offered by the chart endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    /// The last 7 days, bucketed per day.
    Weekly,
    /// The last 30 days, bucketed per day.
    Monthly,
    /// The last 12 months, bucketed per month.
    Yearly,
}

impl Timeframe {
    /// The maximum number of buckets kept for this timeframe.
    pub fn bucket_limit(&self) -> usize {
        match self {
            Timeframe::Weekly => 7,
            Timeframe::Monthly => 30,
            Timeframe::Yearly => 12,
        }
    }

    /// Collapse a calendar date onto this timeframe's bucket key: the day
    /// itself for weekly/monthly, the first of the month for yearly.
    fn bucket_key(&self, date: Date) -> Date {
        match self {
            Timeframe::Weekly | Timeframe::Monthly => date,
            Timeframe::Yearly => date.replace_day(1).unwrap(),
        }
    }
}

/// One time bucket of the chart series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeframeBucket {
    /// The bucket key: the day, or the first of the month for yearly series.
    pub date: Date,
    /// The magnitude of revenue recorded in this bucket.
    pub revenue_total: f64,
    /// The magnitude of expenses recorded in this bucket.
    pub expense_total: f64,
    /// How many activities start in this bucket.
    pub activity_count: usize,
}

/// The magnitude of an amount, with non-finite values coerced to zero.
///
/// Reporting views trade strictness for resilience: a NaN or infinite amount
/// must never poison a whole series.
fn magnitude(amount: f64) -> f64 {
    if amount.is_finite() { amount.abs() } else { 0.0 }
}

/// Group transactions by the calendar day of their timestamp and compute a
/// running balance across the sorted days.
///
/// One row is produced per distinct day present in either input (activities
/// contribute their start day); days with no records at all are omitted, not
/// zero-filled. Rows are sorted ascending by date and each carries the
/// cumulative net (revenue − expense) from the first row to itself.
pub fn bucket_by_day(transactions: &[Transaction], activities: &[Activity]) -> Vec<DailyBalance> {
    let mut daily_totals: HashMap<Date, (f64, f64)> = HashMap::new();

    for transaction in transactions {
        let day = transaction.date.date();
        let entry = daily_totals.entry(day).or_insert((0.0, 0.0));

        match transaction.category {
            Category::Revenu => entry.0 += magnitude(transaction.amount),
            Category::Depense => entry.1 += magnitude(transaction.amount),
        }
    }

    for activity in activities {
        daily_totals.entry(activity.start.date()).or_insert((0.0, 0.0));
    }

    let mut sorted_days: Vec<Date> = daily_totals.keys().copied().collect();
    sorted_days.sort();

    let mut running_balance = 0.0;

    sorted_days
        .into_iter()
        .map(|date| {
            let (revenue_total, expense_total) = daily_totals[&date];
            running_balance += revenue_total - expense_total;

            DailyBalance {
                date,
                revenue_total,
                expense_total,
                running_balance,
            }
        })
        .collect()
}

/// Compute category totals and the net balance over a set of transactions.
///
/// The totals always take the magnitude per category and reconstruct the
/// sign by subtraction, so the result does not depend on the sign convention
/// stored in `amount`. Summing signed amounts directly would double-count
/// the sign whenever an expense is stored as a negative number.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut summary = Summary::default();

    for transaction in transactions {
        match transaction.category {
            Category::Revenu => {
                summary.revenue_total += magnitude(transaction.amount);
                summary.revenue_count += 1;
            }
            Category::Depense => {
                summary.expense_total += magnitude(transaction.amount);
                summary.expense_count += 1;
            }
        }
    }

    summary.net_balance = summary.revenue_total - summary.expense_total;
    summary
}

/// Bucket transactions and activities into a chart series for the given
/// timeframe.
///
/// Buckets are keyed per day (weekly, monthly) or per month (yearly), sorted
/// ascending, and truncated to the most recent [Timeframe::bucket_limit]
/// buckets. Activities are counted in the bucket their start falls into.
pub fn group_by_timeframe(
    transactions: &[Transaction],
    activities: &[Activity],
    timeframe: Timeframe,
) -> Vec<TimeframeBucket> {
    let mut totals: HashMap<Date, (f64, f64, usize)> = HashMap::new();

    for transaction in transactions {
        let key = timeframe.bucket_key(transaction.date.date());
        let entry = totals.entry(key).or_insert((0.0, 0.0, 0));

        match transaction.category {
            Category::Revenu => entry.0 += magnitude(transaction.amount),
            Category::Depense => entry.1 += magnitude(transaction.amount),
        }
    }

    for activity in activities {
        let key = timeframe.bucket_key(activity.start.date());
        totals.entry(key).or_insert((0.0, 0.0, 0)).2 += 1;
    }

    let mut sorted_keys: Vec<Date> = totals.keys().copied().collect();
    sorted_keys.sort();

    // Keep only the most recent buckets.
    let skip = sorted_keys.len().saturating_sub(timeframe.bucket_limit());

    sorted_keys
        .into_iter()
        .skip(skip)
        .map(|date| {
            let (revenue_total, expense_total, activity_count) = totals[&date];

            TimeframeBucket {
                date,
                revenue_total,
                expense_total,
                activity_count,
            }
        })
        .collect()
}
