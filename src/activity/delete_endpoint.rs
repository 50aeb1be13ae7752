//! Defines the endpoint for deleting an activity.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::{AppState, Error, activity::delete_activity, database_id::ActivityId};

/// A route handler for deleting an activity.
///
/// Deleting an id that is already gone responds with a 404 so clients can
/// reconcile locally.
pub async fn delete_activity_endpoint(
    State(state): State<AppState>,
    Path(id): Path<ActivityId>,
) -> Result<Json<Value>, Error> {
    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    delete_activity(id, &connection)?;

    Ok(Json(json!({ "message": "activity deleted" })))
}

#[cfg(test)]
mod delete_activity_endpoint_tests {
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{AppState, activity::Activity, build_router, endpoints};

    fn new_test_server() -> TestServer {
        let connection = Connection::open_in_memory().unwrap();
        let state = AppState::new(connection).unwrap();

        TestServer::new(build_router(state))
    }

    #[tokio::test]
    async fn deletes_activity() {
        let server = new_test_server();
        let created = server
            .post(endpoints::ACTIVITIES)
            .json(&json!({
                "title": "Checkup",
                "start": "2024-01-01T10:00:00Z",
                "end": "2024-01-01T12:00:00Z"
            }))
            .await
            .json::<Activity>();
        let path = endpoints::format_endpoint(endpoints::ACTIVITY, created.id);

        server.delete(&path).await.assert_status_ok();

        server.get(&path).await.assert_status_not_found();
    }

    #[tokio::test]
    async fn responds_404_for_unknown_id() {
        let server = new_test_server();

        let response = server
            .delete(&endpoints::format_endpoint(endpoints::ACTIVITY, 999))
            .await;

        response.assert_status_not_found();
    }
}
