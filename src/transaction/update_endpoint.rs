//! Defines the endpoint for updating an existing transaction.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState, Error,
    database_id::TransactionId,
    transaction::{Transaction, TransactionData, update_transaction},
};

/// A route handler replacing the category, amount and description of a
/// transaction. The stored timestamp is kept.
///
/// # Errors
/// Responds with a 400 on an invalid body and a 404 when the transaction
/// does not exist.
pub async fn update_transaction_endpoint(
    State(state): State<AppState>,
    Path(id): Path<TransactionId>,
    Json(data): Json<TransactionData>,
) -> Result<Json<Transaction>, Error> {
    let builder = data.into_builder()?;

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    let transaction = update_transaction(id, builder, &connection)?;

    Ok(Json(transaction))
}

#[cfg(test)]
mod update_transaction_endpoint_tests {
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{AppState, build_router, endpoints, transaction::Transaction};

    fn new_test_server() -> TestServer {
        let connection = Connection::open_in_memory().unwrap();
        let state = AppState::new(connection).unwrap();

        TestServer::new(build_router(state))
    }

    #[tokio::test]
    async fn updates_transaction_fields() {
        let server = new_test_server();
        let created = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({ "category": "revenu", "amount": 100.0 }))
            .await
            .json::<Transaction>();

        let response = server
            .put(&endpoints::format_endpoint(
                endpoints::TRANSACTION,
                created.id,
            ))
            .json(&json!({
                "category": "depense",
                "amount": 40.0,
                "description": "corrected"
            }))
            .await;

        response.assert_status_ok();

        let updated = response.json::<Transaction>();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.category.as_str(), "depense");
        assert_eq!(updated.amount, 40.0);
        assert_eq!(updated.date, created.date);
    }

    #[tokio::test]
    async fn responds_404_for_unknown_id() {
        let server = new_test_server();

        let response = server
            .put(&endpoints::format_endpoint(endpoints::TRANSACTION, 999))
            .json(&json!({ "category": "revenu", "amount": 1.0 }))
            .await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn responds_400_for_invalid_body() {
        let server = new_test_server();
        let created = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({ "category": "revenu", "amount": 100.0 }))
            .await
            .json::<Transaction>();

        let response = server
            .put(&endpoints::format_endpoint(
                endpoints::TRANSACTION,
                created.id,
            ))
            .json(&json!({ "amount": 40.0 }))
            .await;

        response.assert_status_bad_request();
    }
}
