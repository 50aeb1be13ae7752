//! Defines the endpoint for deleting a transaction.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::{AppState, Error, database_id::TransactionId, transaction::delete_transaction};

/// A route handler for deleting a transaction.
///
/// Deleting an id that is already gone responds with a 404 rather than an
/// error page, so clients that retried or raced another actor can reconcile
/// locally.
pub async fn delete_transaction_endpoint(
    State(state): State<AppState>,
    Path(id): Path<TransactionId>,
) -> Result<Json<Value>, Error> {
    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    delete_transaction(id, &connection)?;

    Ok(Json(json!({ "message": "transaction deleted" })))
}
