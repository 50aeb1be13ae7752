//! Defines the endpoint for creating a new transaction.

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState, Error,
    transaction::{Transaction, TransactionData, create_transaction},
};

/// A route handler for creating a new transaction.
///
/// # Errors
/// Responds with a 400 if the category is missing or invalid, or if the
/// amount is missing, zero or not a finite number.
pub async fn create_transaction_endpoint(
    State(state): State<AppState>,
    Json(data): Json<TransactionData>,
) -> Result<(StatusCode, Json<Transaction>), Error> {
    let builder = data.into_builder()?;

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    let transaction = create_transaction(builder, &connection)?;

    Ok((StatusCode::CREATED, Json(transaction)))
}
