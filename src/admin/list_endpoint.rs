//! Defines the endpoint for listing administrators.

use axum::{Json, extract::State};

use crate::{
    AppState, Error,
    admin::{PublicAdmin, list_admins},
};

/// A route handler listing all admins without their password hashes.
pub async fn get_admins_endpoint(
    State(state): State<AppState>,
) -> Result<Json<Vec<PublicAdmin>>, Error> {
    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    let admins = list_admins(&connection)?
        .iter()
        .map(|admin| admin.to_public())
        .collect();

    Ok(Json(admins))
}

#[cfg(test)]
mod list_admin_endpoint_tests {
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{AppState, admin::PublicAdmin, build_router, endpoints};

    fn new_test_server() -> TestServer {
        let connection = Connection::open_in_memory().unwrap();
        let state = AppState::new(connection).unwrap();

        TestServer::new(build_router(state))
    }

    #[tokio::test]
    async fn lists_created_admins() {
        let server = new_test_server();

        for email in ["root@clinic.test", "second@clinic.test"] {
            server
                .post(endpoints::ADMINS)
                .json(&json!({ "email": email, "password": "hunter2" }))
                .await
                .assert_status(axum::http::StatusCode::CREATED);
        }

        let admins = server.get(endpoints::ADMINS).await.json::<Vec<PublicAdmin>>();

        assert_eq!(admins.len(), 2);
        assert_eq!(admins[0].email, "root@clinic.test");
    }
}
