//! Route handlers serving pre-aggregated report data.
//!
//! Renderers (the SPA's charts and its PDF export) consume these payloads
//! verbatim; no aggregation happens client-side.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{
    AppState, Error,
    activity::list_activities,
    report::{
        DailyBalance, MonthQuery, Summary, Timeframe, TimeframeBucket, bucket_by_day, by_month,
        group_by_timeframe, summarize,
    },
    transaction::{Transaction, list_transactions},
};

/// Serve the day-by-day totals with the running balance column.
pub async fn get_daily_report(
    State(state): State<AppState>,
) -> Result<Json<Vec<DailyBalance>>, Error> {
    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    let transactions = list_transactions(&connection)?;
    let activities = list_activities(&connection)?;

    Ok(Json(bucket_by_day(&transactions, &activities)))
}

/// Serve category totals for the period selected by the query parameters.
///
/// Without parameters (or with the sentinel `0`) the summary covers all
/// recorded transactions.
pub async fn get_summary_report(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Summary>, Error> {
    let (year, month) = query.components()?;

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    let transactions = list_transactions(&connection)?;

    let selected: Vec<Transaction> = by_month(&transactions, year, month)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(summarize(&selected)))
}

/// Serve the chart series for a weekly, monthly or yearly window.
pub async fn get_timeframe_report(
    State(state): State<AppState>,
    Path(timeframe): Path<Timeframe>,
) -> Result<Json<Vec<TimeframeBucket>>, Error> {
    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    let transactions = list_transactions(&connection)?;
    let activities = list_activities(&connection)?;

    Ok(Json(group_by_timeframe(
        &transactions,
        &activities,
        timeframe,
    )))
}
