//! Defines the endpoint for updating an existing activity.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState, Error,
    activity::{Activity, ActivityData, update_activity},
    database_id::ActivityId,
};

/// A route handler replacing the title, timestamps and description of an
/// activity.
///
/// # Errors
/// Responds with a 400 on an invalid body and a 404 when the activity does
/// not exist.
pub async fn update_activity_endpoint(
    State(state): State<AppState>,
    Path(id): Path<ActivityId>,
    Json(data): Json<ActivityData>,
) -> Result<Json<Activity>, Error> {
    let builder = data.into_builder()?;

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    let activity = update_activity(id, builder, &connection)?;

    Ok(Json(activity))
}
