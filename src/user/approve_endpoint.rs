//! Defines the endpoint for approving a registered user.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::{AppState, Error, database_id::UserId, user::approve_user};

/// A route handler flipping a user's approval flag.
///
/// Approving an already-approved user succeeds and leaves the account
/// unchanged, so concurrent administrators cannot trip over each other.
pub async fn approve_user_endpoint(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<Json<Value>, Error> {
    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    approve_user(id, &connection)?;

    Ok(Json(json!({ "message": "user approved" })))
}

#[cfg(test)]
mod approve_user_endpoint_tests {
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{AppState, build_router, endpoints, user::PublicUser};

    fn new_test_server() -> TestServer {
        let connection = Connection::open_in_memory().unwrap();
        let state = AppState::new(connection).unwrap();

        TestServer::new(build_router(state))
    }

    #[tokio::test]
    async fn approval_is_idempotent() {
        let server = new_test_server();
        server
            .post(endpoints::REGISTER)
            .json(&json!({ "email": "foo@bar.baz", "password": "hunter2" }))
            .await
            .assert_status_ok();

        let users = server.get(endpoints::USERS).await.json::<Vec<PublicUser>>();
        let path = endpoints::format_endpoint(endpoints::APPROVE_USER, users[0].id);

        server.put(&path).await.assert_status_ok();
        server.put(&path).await.assert_status_ok();

        let users = server.get(endpoints::USERS).await.json::<Vec<PublicUser>>();
        assert!(users[0].is_approved);
    }

    #[tokio::test]
    async fn responds_404_for_unknown_id() {
        let server = new_test_server();

        let response = server
            .put(&endpoints::format_endpoint(endpoints::APPROVE_USER, 999))
            .await;

        response.assert_status_not_found();
    }
}
