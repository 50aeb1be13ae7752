//! Defines the endpoint for logging in an administrator.

use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::{
    AppState, Error,
    admin::get_admin_by_email,
    user::Credentials,
};

/// A route handler for administrator log-in.
///
/// Both an unknown email and a wrong password respond with the same 401 so
/// the endpoint does not reveal which admin accounts exist.
pub async fn admin_log_in_endpoint(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<Value>, Error> {
    let (email, password) = credentials.into_parts()?;

    let admin = {
        let connection = state
            .db_connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)?;

        get_admin_by_email(&email, &connection).map_err(|error| match error {
            Error::NotFound => Error::InvalidCredentials,
            error => error,
        })?
    };

    if !admin.password_hash.verify(&password)? {
        return Err(Error::InvalidCredentials);
    }

    Ok(Json(json!({
        "message": "admin login successful",
        "admin": admin.to_public()
    })))
}

#[cfg(test)]
mod admin_log_in_endpoint_tests {
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};

    use crate::{AppState, build_router, endpoints};

    fn new_test_server() -> TestServer {
        let connection = Connection::open_in_memory().unwrap();
        let state = AppState::new(connection).unwrap();

        TestServer::new(build_router(state))
    }

    #[tokio::test]
    async fn logs_in_with_correct_credentials() {
        let server = new_test_server();
        server
            .post(endpoints::ADMINS)
            .json(&json!({ "email": "root@clinic.test", "password": "hunter2" }))
            .await
            .assert_status(axum::http::StatusCode::CREATED);

        let response = server
            .post(endpoints::ADMIN_LOG_IN)
            .json(&json!({ "email": "root@clinic.test", "password": "hunter2" }))
            .await;

        response.assert_status_ok();

        let body = response.json::<Value>();
        assert_eq!(body["admin"]["email"], json!("root@clinic.test"));
        assert!(body["admin"].get("password").is_none());
    }

    #[tokio::test]
    async fn unknown_email_and_wrong_password_both_respond_401() {
        let server = new_test_server();
        server
            .post(endpoints::ADMINS)
            .json(&json!({ "email": "root@clinic.test", "password": "hunter2" }))
            .await
            .assert_status(axum::http::StatusCode::CREATED);

        server
            .post(endpoints::ADMIN_LOG_IN)
            .json(&json!({ "email": "nobody@clinic.test", "password": "hunter2" }))
            .await
            .assert_status_unauthorized();

        server
            .post(endpoints::ADMIN_LOG_IN)
            .json(&json!({ "email": "root@clinic.test", "password": "hunter3" }))
            .await
            .assert_status_unauthorized();
    }
}
