//! Defines the endpoint for deleting an administrator.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::{AppState, Error, admin::delete_admin, database_id::AdminId};

/// A route handler for deleting an administrator account.
///
/// The founding admin (lowest id) is refused with a 400; deleting an id that
/// is already gone responds with a 404.
pub async fn delete_admin_endpoint(
    State(state): State<AppState>,
    Path(id): Path<AdminId>,
) -> Result<Json<Value>, Error> {
    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    delete_admin(id, &connection)?;

    Ok(Json(json!({ "message": "admin deleted" })))
}
