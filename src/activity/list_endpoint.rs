//! Defines the endpoints for reading activities.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    activity::{ActivityStatus, ActivityWithStatus, get_activity, list_activities},
    database_id::ActivityId,
    report::by_activity_status,
};

/// The status query parameter for the activity listing.
#[derive(Debug, Default, Deserialize)]
pub struct StatusQuery {
    /// One of `upcoming`, `ongoing`, `finished` or `all`.
    #[serde(default)]
    pub status: Option<String>,
}

impl StatusQuery {
    fn wanted_status(&self) -> Result<Option<ActivityStatus>, Error> {
        match self.status.as_deref() {
            None => Ok(None),
            Some(raw) if raw.eq_ignore_ascii_case("all") => Ok(None),
            Some(raw) => raw.parse().map(Some),
        }
    }
}

/// A route handler for listing activities, earliest start first.
///
/// Each activity is served with its status derived from the request time.
/// The optional `status` query parameter narrows the listing.
pub async fn get_activities_endpoint(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<Vec<ActivityWithStatus>>, Error> {
    let wanted = query.wanted_status()?;
    let now = OffsetDateTime::now_utc();

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    let activities = list_activities(&connection)?;

    let selected = by_activity_status(&activities, wanted, now)
        .into_iter()
        .cloned()
        .map(|activity| ActivityWithStatus::new(activity, now))
        .collect();

    Ok(Json(selected))
}

/// A route handler for getting an activity by its database ID.
///
/// Responds with a 404 if the requested activity does not exist.
pub async fn get_activity_endpoint(
    State(state): State<AppState>,
    Path(id): Path<ActivityId>,
) -> Result<Json<ActivityWithStatus>, Error> {
    let now = OffsetDateTime::now_utc();

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    let activity = get_activity(id, &connection)?;

    Ok(Json(ActivityWithStatus::new(activity, now)))
}
