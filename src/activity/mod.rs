//! Scheduled activities and their CRUD endpoints.
//!
//! An activity's status (upcoming, ongoing, finished) is never stored; it is
//! derived from the current time whenever an activity is read.

mod core;
mod create_endpoint;
mod delete_endpoint;
mod list_endpoint;
mod status;
mod update_endpoint;

pub use core::{
    Activity, ActivityBuilder, ActivityData, ActivityWithStatus, create_activity,
    create_activity_table, delete_activity, get_activity, list_activities, map_activity_row,
    update_activity,
};
pub use create_endpoint::create_activity_endpoint;
pub use delete_endpoint::delete_activity_endpoint;
pub use list_endpoint::{get_activities_endpoint, get_activity_endpoint};
pub use status::ActivityStatus;
pub use update_endpoint::update_activity_endpoint;
