use async_trait::async_trait;

use crate::domain::{CalendarDay, CheckIn, Gym, NewCheckIn};
use crate::error::AppResult;

#[async_trait]
pub trait GymRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Gym>>;
    async fn create(&self, gym: &Gym) -> AppResult<Gym>;
}

/// Each call is independently atomic. Nothing here makes a
/// `find_by_user_id_on_date` followed by `create` atomic as a pair.
#[async_trait]
pub trait CheckInRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<CheckIn>>;
    async fn find_by_user_id_on_date(
        &self,
        user_id: &str,
        day: &CalendarDay,
    ) -> AppResult<Option<CheckIn>>;
    async fn create(&self, check_in: &NewCheckIn) -> AppResult<CheckIn>;
}
