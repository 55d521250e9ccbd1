use std::sync::Arc;

use chrono::{FixedOffset, Offset, Utc};
use tracing::{debug, info};

use crate::domain::{
    distance_between_coordinates, CalendarDay, CheckIn, Coordinate, DomainError, NewCheckIn,
    MAX_DISTANCE_IN_KILOMETERS,
};
use crate::error::AppResult;
use crate::infrastructure::repositories::{CheckInRepository, GymRepository};
use crate::infrastructure::{Clock, SystemClock};

#[derive(Debug, Clone, PartialEq)]
pub struct CheckInInput {
    pub user_id: String,
    pub gym_id: String,
    pub user_latitude: f64,
    pub user_longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInOutput {
    pub check_in: CheckIn,
}

/// Records a user's visit to a gym once the user is close enough to it and
/// has not checked in yet on the current calendar day.
#[derive(Clone)]
pub struct CheckInService {
    check_in_repo: Arc<dyn CheckInRepository>,
    gym_repo: Arc<dyn GymRepository>,
    clock: Arc<dyn Clock>,
    day_offset: FixedOffset,
}

impl CheckInService {
    pub fn new(check_in_repo: Arc<dyn CheckInRepository>, gym_repo: Arc<dyn GymRepository>) -> Self {
        Self {
            check_in_repo,
            gym_repo,
            clock: Arc::new(SystemClock),
            day_offset: Utc.fix(),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Offset whose local midnight starts a new calendar day.
    pub fn with_day_offset(mut self, day_offset: FixedOffset) -> Self {
        self.day_offset = day_offset;
        self
    }

    pub async fn execute(&self, input: CheckInInput) -> AppResult<CheckInOutput> {
        let gym = self
            .gym_repo
            .find_by_id(&input.gym_id)
            .await?
            .ok_or_else(|| {
                debug!(gym_id = %input.gym_id, "check-in rejected: gym not found");
                DomainError::ResourceNotFound("gym not found".to_string())
            })?;

        let distance_km = distance_between_coordinates(
            Coordinate::new(input.user_latitude, input.user_longitude),
            gym.coordinate(),
        );
        if exceeds_max_distance(distance_km) {
            debug!(
                user_id = %input.user_id,
                gym_id = %gym.id,
                distance_km,
                "check-in rejected: user too far from gym"
            );
            return Err(DomainError::MaxDistance {
                distance_km,
                max_distance_km: MAX_DISTANCE_IN_KILOMETERS,
            }
            .into());
        }

        let now = self.clock.now();
        let today = CalendarDay::containing(now, self.day_offset);
        if self
            .check_in_repo
            .find_by_user_id_on_date(&input.user_id, &today)
            .await?
            .is_some()
        {
            debug!(
                user_id = %input.user_id,
                date = %today.date,
                "check-in rejected: already checked in today"
            );
            return Err(DomainError::MaxNumberOfCheckIns.into());
        }

        let check_in = self
            .check_in_repo
            .create(&NewCheckIn {
                user_id: input.user_id,
                gym_id: gym.id,
                created_at: now,
            })
            .await?;

        info!(
            check_in_id = %check_in.id,
            user_id = %check_in.user_id,
            gym_id = %check_in.gym_id,
            "check-in created"
        );

        Ok(CheckInOutput { check_in })
    }
}

/// Exactly `MAX_DISTANCE_IN_KILOMETERS` away still counts as in reach.
fn exceeds_max_distance(distance_km: f64) -> bool {
    distance_km > MAX_DISTANCE_IN_KILOMETERS
}
