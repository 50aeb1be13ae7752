//! Defines the endpoints for listing users.

use axum::{Json, extract::State};

use crate::{
    AppState, Error,
    user::{PublicUser, list_pending_users, list_users},
};

/// A route handler listing all users without their password hashes.
pub async fn get_users_endpoint(
    State(state): State<AppState>,
) -> Result<Json<Vec<PublicUser>>, Error> {
    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    let users = list_users(&connection)?
        .iter()
        .map(|user| user.to_public())
        .collect();

    Ok(Json(users))
}

/// A route handler listing the users still waiting for approval.
pub async fn get_pending_users_endpoint(
    State(state): State<AppState>,
) -> Result<Json<Vec<PublicUser>>, Error> {
    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    let users = list_pending_users(&connection)?
        .iter()
        .map(|user| user.to_public())
        .collect();

    Ok(Json(users))
}
