//! Defines the endpoints for reading transactions.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{
    AppState, Error,
    database_id::TransactionId,
    report::{MonthQuery, by_month},
    transaction::{Transaction, get_transaction, list_transactions},
};

/// A route handler for listing transactions, most recent first.
///
/// The optional `year` and `month` query parameters narrow the listing to a
/// calendar period; the sentinel value `0` (or omitting the parameter) turns
/// a component off.
pub async fn get_transactions_endpoint(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let (year, month) = query.components()?;

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    let transactions = list_transactions(&connection)?;

    let selected = by_month(&transactions, year, month)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(selected))
}

/// A route handler for getting a transaction by its database ID.
///
/// Responds with a 404 if the requested transaction does not exist.
pub async fn get_transaction_endpoint(
    State(state): State<AppState>,
    Path(id): Path<TransactionId>,
) -> Result<Json<Transaction>, Error> {
    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    let transaction = get_transaction(id, &connection)?;

    Ok(Json(transaction))
}
