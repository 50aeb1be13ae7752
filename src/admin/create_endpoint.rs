//! Defines the endpoint for creating an administrator account.

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState, Error,
    admin::{PublicAdmin, create_admin},
    password::PasswordHash,
    user::Credentials,
};

/// A route handler creating a new administrator account.
///
/// # Errors
/// Responds with a 400 if a field is missing, the email is taken, or the
/// account cap has been reached.
pub async fn create_admin_endpoint(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<(StatusCode, Json<PublicAdmin>), Error> {
    let (email, password) = credentials.into_parts()?;

    let password_hash = PasswordHash::from_raw_password(&password, PasswordHash::DEFAULT_COST)?;

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    let admin = create_admin(&email, &password_hash, &connection)?;

    Ok((StatusCode::CREATED, Json(admin.to_public())))
}

#[cfg(test)]
mod create_admin_endpoint_tests {
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{AppState, admin::{MAX_ADMIN_ACCOUNTS, PublicAdmin}, build_router, endpoints};

    fn new_test_server() -> TestServer {
        let connection = Connection::open_in_memory().unwrap();
        let state = AppState::new(connection).unwrap();

        TestServer::new(build_router(state))
    }

    #[tokio::test]
    async fn creates_admin_and_returns_201() {
        let server = new_test_server();

        let response = server
            .post(endpoints::ADMINS)
            .json(&json!({ "email": "root@clinic.test", "password": "hunter2" }))
            .await;

        response.assert_status(axum::http::StatusCode::CREATED);

        let admin = response.json::<PublicAdmin>();
        assert!(admin.id > 0);
        assert_eq!(admin.email, "root@clinic.test");
    }

    #[tokio::test]
    async fn rejects_fourth_admin() {
        let server = new_test_server();

        for i in 0..MAX_ADMIN_ACCOUNTS {
            server
                .post(endpoints::ADMINS)
                .json(&json!({
                    "email": format!("admin{i}@clinic.test"),
                    "password": "hunter2"
                }))
                .await
                .assert_status(axum::http::StatusCode::CREATED);
        }

        let response = server
            .post(endpoints::ADMINS)
            .json(&json!({ "email": "extra@clinic.test", "password": "hunter2" }))
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn rejects_duplicate_email() {
        let server = new_test_server();
        server
            .post(endpoints::ADMINS)
            .json(&json!({ "email": "root@clinic.test", "password": "hunter2" }))
            .await
            .assert_status(axum::http::StatusCode::CREATED);

        let response = server
            .post(endpoints::ADMINS)
            .json(&json!({ "email": "root@clinic.test", "password": "hunter3" }))
            .await;

        response.assert_status_bad_request();
    }
}
