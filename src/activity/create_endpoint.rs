//! Defines the endpoint for creating a new activity.

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState, Error,
    activity::{Activity, ActivityData, create_activity},
};

/// A route handler for creating a new activity.
///
/// # Errors
/// Responds with a 400 if the title, start or end is missing.
pub async fn create_activity_endpoint(
    State(state): State<AppState>,
    Json(data): Json<ActivityData>,
) -> Result<(StatusCode, Json<Activity>), Error> {
    let builder = data.into_builder()?;

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    let activity = create_activity(builder, &connection)?;

    Ok((StatusCode::CREATED, Json(activity)))
}
