//! Defines the endpoint for deleting a user.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::{AppState, Error, database_id::UserId, user::delete_user};

/// A route handler for deleting a user, used both for rejecting a pending
/// registration and for removing an existing account.
pub async fn delete_user_endpoint(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<Json<Value>, Error> {
    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    delete_user(id, &connection)?;

    Ok(Json(json!({ "message": "user deleted" })))
}

#[cfg(test)]
mod delete_user_endpoint_tests {
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
    async fn rejecting_pending_user_removes_account() {
        let server = new_test_server();
        server
            .post(endpoints::REGISTER)
            .json(&json!({ "email": "foo@bar.baz", "password": "hunter2" }))
            .await
            .assert_status_ok();

        let users = server.get(endpoints::USERS).await.json::<Vec<PublicUser>>();

        server
            .delete(&endpoints::format_endpoint(endpoints::USER, users[0].id))
            .await
            .assert_status_ok();

        let users = server.get(endpoints::USERS).await.json::<Vec<PublicUser>>();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn responds_404_for_unknown_id() {
        let server = new_test_server();

        let response = server
            .delete(&endpoints::format_endpoint(endpoints::USER, 999))
            .await;

        response.assert_status_not_found();
    }
}
