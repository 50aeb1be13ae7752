//! Defines the core data models and database queries for activities.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, UtcOffset};

use crate::{Error, activity::ActivityStatus, database_id::ActivityId};

// ============================================================================
// MODELS
// ============================================================================

/// A scheduled event with a start and an end, e.g. a consultation slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// The ID of the activity.
    pub id: ActivityId,
    /// A short name for the activity.
    pub title: String,
    /// When the activity starts.
    #[serde(with = "time::serde::rfc3339")]
    pub start: OffsetDateTime,
    /// When the activity ends.
    ///
    /// Keeping `start < end` is the client's responsibility; the store does
    /// not enforce it.
    #[serde(with = "time::serde::rfc3339")]
    pub end: OffsetDateTime,
    /// A text description of the activity.
    pub description: Option<String>,
}

impl Activity {
    /// Derive the status of this activity as seen at the instant `now`.
    pub fn status_at(&self, now: OffsetDateTime) -> ActivityStatus {
        ActivityStatus::derive(now, self.start, self.end)
    }
}

/// An activity together with its status derived at read time.
///
/// This is the shape served by the read endpoints; the status never touches
/// the database.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityWithStatus {
    /// The stored activity.
    #[serde(flatten)]
    pub activity: Activity,
    /// The status derived from the request time.
    pub status: ActivityStatus,
}

impl ActivityWithStatus {
    /// Pair `activity` with its status as seen at the instant `now`.
    pub fn new(activity: Activity, now: OffsetDateTime) -> Self {
        let status = activity.status_at(now);

        Self { activity, status }
    }
}

/// The JSON body accepted when creating or updating an activity.
#[derive(Debug, Serialize, Deserialize)]
pub struct ActivityData {
    /// A short name for the activity.
    #[serde(default)]
    pub title: Option<String>,
    /// When the activity starts.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub start: Option<OffsetDateTime>,
    /// When the activity ends.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end: Option<OffsetDateTime>,
    /// A text description of the activity.
    #[serde(default)]
    pub description: Option<String>,
}

impl ActivityData {
    /// Validate the request body and produce a builder for the store.
    ///
    /// # Errors
    /// Returns an [Error::MissingField] if the title is absent or blank, or
    /// if either timestamp is absent.
    pub fn into_builder(self) -> Result<ActivityBuilder, Error> {
        let title = match self.title {
            Some(title) if !title.trim().is_empty() => title,
            _ => return Err(Error::MissingField("title")),
        };

        let start = self.start.ok_or(Error::MissingField("start"))?;
        let end = self.end.ok_or(Error::MissingField("end"))?;

        Ok(ActivityBuilder {
            title,
            // Timestamps are stored in UTC so their text form sorts by
            // instant.
            start: start.to_offset(UtcOffset::UTC),
            end: end.to_offset(UtcOffset::UTC),
            description: self.description,
        })
    }
}

/// A validated activity that has not been written to the store yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityBuilder {
    /// A short name for the activity. Never blank.
    pub title: String,
    /// When the activity starts.
    pub start: OffsetDateTime,
    /// When the activity ends.
    pub end: OffsetDateTime,
    /// A text description of the activity.
    pub description: Option<String>,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new activity in the database.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn create_activity(
    builder: ActivityBuilder,
    connection: &Connection,
) -> Result<Activity, Error> {
    let activity = connection
        .prepare(
            "INSERT INTO activity (title, start_at, end_at, description)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, title, start_at, end_at, description",
        )?
        .query_one(
            (
                builder.title,
                builder.start,
                builder.end,
                builder.description,
            ),
            map_activity_row,
        )?;

    Ok(activity)
}

/// Retrieve an activity from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid activity,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_activity(id: ActivityId, connection: &Connection) -> Result<Activity, Error> {
    let activity = connection
        .prepare("SELECT id, title, start_at, end_at, description FROM activity WHERE id = :id")?
        .query_one(&[(":id", &id)], map_activity_row)?;

    Ok(activity)
}

/// Retrieve all activities, earliest start first.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn list_activities(connection: &Connection) -> Result<Vec<Activity>, Error> {
    connection
        .prepare(
            "SELECT id, title, start_at, end_at, description FROM activity
             ORDER BY start_at ASC",
        )?
        .query_map([], map_activity_row)?
        .map(|maybe_activity| maybe_activity.map_err(Error::from))
        .collect()
}

/// Replace the title, timestamps and description of an existing activity.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid activity,
/// - or [Error::SqlError] there is some other SQL error.
pub fn update_activity(
    id: ActivityId,
    builder: ActivityBuilder,
    connection: &Connection,
) -> Result<Activity, Error> {
    let activity = connection
        .prepare(
            "UPDATE activity SET title = ?1, start_at = ?2, end_at = ?3, description = ?4
             WHERE id = ?5
             RETURNING id, title, start_at, end_at, description",
        )?
        .query_one(
            (
                builder.title,
                builder.start,
                builder.end,
                builder.description,
                id,
            ),
            map_activity_row,
        )?;

    Ok(activity)
}

/// Delete an activity from the database.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid activity,
/// - or [Error::SqlError] there is some other SQL error.
pub fn delete_activity(id: ActivityId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM activity WHERE id = :id", &[(":id", &id)])?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

/// Create the activity table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL
/// error.
pub fn create_activity_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS activity (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                start_at TEXT NOT NULL,
                end_at TEXT NOT NULL,
                description TEXT
                )",
        (),
    )?;

    // Ensure the sequence starts at 1
    connection.execute(
        "INSERT OR IGNORE INTO sqlite_sequence (name, seq) VALUES ('activity', 0)",
        (),
    )?;

    Ok(())
}

/// Map a database row to an Activity.
pub fn map_activity_row(row: &Row) -> Result<Activity, rusqlite::Error> {
    let id = row.get(0)?;
    let title = row.get(1)?;
    let start = row.get(2)?;
    let end = row.get(3)?;
    let description = row.get(4)?;

    Ok(Activity {
        id,
        title,
        start,
        end,
        description,
    })
}
