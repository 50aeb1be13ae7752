//! Defines the endpoint for registering a new user account.

use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::{
    AppState, Error,
    password::PasswordHash,
    user::{Credentials, create_user},
};

/// A route handler creating a new, unapproved user account.
///
/// The account cannot log in until an administrator approves it.
///
/// # Errors
/// Responds with a 400 if a field is missing or the email is already
/// registered.
pub async fn register_endpoint(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<Value>, Error> {
    let (email, password) = credentials.into_parts()?;

    let password_hash = PasswordHash::from_raw_password(&password, PasswordHash::DEFAULT_COST)?;

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    create_user(&email, &password_hash, &connection)?;

    Ok(Json(json!({
        "message": "account created, awaiting administrator approval"
    })))
}

#[cfg(test)]
mod register_endpoint_tests {
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
    async fn registers_unapproved_account() {
        let server = new_test_server();

        let response = server
            .post(endpoints::REGISTER)
            .json(&json!({ "email": "foo@bar.baz", "password": "hunter2" }))
            .await;

        response.assert_status_ok();

        let users = server.get(endpoints::USERS).await.json::<Vec<PublicUser>>();
        assert_eq!(users.len(), 1);
        assert!(!users[0].is_approved);
    }

    #[tokio::test]
    async fn rejects_duplicate_email() {
        let server = new_test_server();
        server
            .post(endpoints::REGISTER)
            .json(&json!({ "email": "foo@bar.baz", "password": "hunter2" }))
            .await
            .assert_status_ok();

        let response = server
            .post(endpoints::REGISTER)
            .json(&json!({ "email": "foo@bar.baz", "password": "hunter3" }))
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn rejects_missing_password() {
        let server = new_test_server();

        let response = server
            .post(endpoints::REGISTER)
            .json(&json!({ "email": "foo@bar.baz" }))
            .await;

        response.assert_status_bad_request();
    }
}
