//! The derived status of an activity.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::Error;

/// Where an activity sits relative to a given instant.
///
/// The status is a total function of `(now, start, end)`: every input maps to
/// exactly one variant. Both boundary instants count as ongoing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    /// The activity has not started yet (`now < start`).
    Upcoming,
    /// The activity is in progress (`start <= now <= end`).
    Ongoing,
    /// The activity is over (`now > end`).
    Finished,
}

impl ActivityStatus {
    /// Derive the status of an activity running from `start` to `end` as
    /// seen at the instant `now`.
    ///
    /// `now` is an explicit parameter rather than the system clock so the
    /// derivation stays deterministic and testable.
    pub fn derive(now: OffsetDateTime, start: OffsetDateTime, end: OffsetDateTime) -> Self {
        if now < start {
            ActivityStatus::Upcoming
        } else if now > end {
            ActivityStatus::Finished
        } else {
            ActivityStatus::Ongoing
        }
    }

    /// The lowercase name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityStatus::Upcoming => "upcoming",
            ActivityStatus::Ongoing => "ongoing",
            ActivityStatus::Finished => "finished",
        }
    }
}

impl FromStr for ActivityStatus {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("upcoming") {
            Ok(ActivityStatus::Upcoming)
        } else if value.eq_ignore_ascii_case("ongoing") {
            Ok(ActivityStatus::Ongoing)
        } else if value.eq_ignore_ascii_case("finished") {
            Ok(ActivityStatus::Finished)
        } else {
            Err(Error::InvalidStatus)
        }
    }
}

impl Display for ActivityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
