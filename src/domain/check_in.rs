use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A recorded visit of a user to a gym. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CheckIn {
    pub id: String,
    pub user_id: String,
    pub gym_id: String,
    pub created_at: DateTime<Utc>,
    pub validated_at: Option<DateTime<Utc>>,
}

/// Fields supplied by the caller when persisting a check-in; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCheckIn {
    pub user_id: String,
    pub gym_id: String,
    pub created_at: DateTime<Utc>,
}

/// A calendar date together with its half-open UTC bounds `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl CalendarDay {
    /// The calendar day `instant` falls on, as seen from `offset`.
    pub fn containing(instant: DateTime<Utc>, offset: FixedOffset) -> Self {
        let date = instant.with_timezone(&offset).date_naive();
        let local_midnight = date.and_time(NaiveTime::MIN);
        let start = (local_midnight - Duration::seconds(i64::from(offset.local_minus_utc())))
            .and_utc();

        Self {
            date,
            start,
            end: start + Duration::days(1),
        }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}
