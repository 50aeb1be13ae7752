//! Pure selection functions for display and export views.

use serde::Deserialize;
use time::{Month, OffsetDateTime};

use crate::{
    Error,
    activity::{Activity, ActivityStatus},
    transaction::Transaction,
};

/// Records that carry a single reporting timestamp.
///
/// Transactions report on the moment they happened; activities report on the
/// moment they start.
pub trait Timestamped {
    /// The timestamp used for month filtering and time bucketing.
    fn timestamp(&self) -> OffsetDateTime;
}

impl Timestamped for Transaction {
    fn timestamp(&self) -> OffsetDateTime {
        self.date
    }
}

impl Timestamped for Activity {
    fn timestamp(&self) -> OffsetDateTime {
        self.start
    }
}

/// The year/month query parameters shared by the list and summary endpoints.
///
/// A missing component, or the sentinel value `0`, disables that component
/// of the filter.
#[derive(Debug, Default, Deserialize)]
pub struct MonthQuery {
    /// The calendar year to keep, e.g. `2024`.
    #[serde(default)]
    pub year: Option<i32>,
    /// The calendar month to keep, 1-12.
    #[serde(default)]
    pub month: Option<u8>,
}

impl MonthQuery {
    /// Resolve the raw query parameters into filter components.
    ///
    /// # Errors
    /// Returns an [Error::InvalidMonth] if the month is outside 1-12.
    pub fn components(&self) -> Result<(Option<i32>, Option<Month>), Error> {
        let year = self.year.filter(|&year| year != 0);

        let month = match self.month {
            None | Some(0) => None,
            Some(raw) => Some(Month::try_from(raw).map_err(|_| Error::InvalidMonth)?),
        };

        Ok((year, month))
    }
}

/// Select the records whose timestamp falls in the given year and month.
///
/// `None` disables a component. Active components form a pure conjunction: a
/// record is kept only if it matches every one of them, so passing `None`
/// for both returns every record.
pub fn by_month<T: Timestamped>(
    records: &[T],
    year: Option<i32>,
    month: Option<Month>,
) -> Vec<&T> {
    records
        .iter()
        .filter(|record| {
            let date = record.timestamp().date();

            year.is_none_or(|year| date.year() == year)
                && month.is_none_or(|month| date.month() == month)
        })
        .collect()
}

/// Select the activities with the wanted status as seen at the instant `now`.
///
/// `None` keeps every activity. `now` is an explicit parameter so the
/// selection is deterministic and testable.
pub fn by_activity_status(
    activities: &[Activity],
    status: Option<ActivityStatus>,
    now: OffsetDateTime,
) -> Vec<&Activity> {
    activities
        .iter()
        .filter(|activity| status.is_none_or(|wanted| activity.status_at(now) == wanted))
        .collect()
}
