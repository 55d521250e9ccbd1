use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{CalendarDay, CheckIn, Gym, NewCheckIn};
use crate::error::{AppError, AppResult};

use super::traits::{CheckInRepository, GymRepository};

/// Process-local gym store for tests and local runs without PostgreSQL.
#[derive(Default)]
pub struct InMemoryGymRepository {
    gyms: RwLock<Vec<Gym>>,
}

impl InMemoryGymRepository {
    pub fn with_gyms(gyms: Vec<Gym>) -> Self {
        Self {
            gyms: RwLock::new(gyms),
        }
    }
}

#[async_trait]
impl GymRepository for InMemoryGymRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Gym>> {
        Ok(self.gyms.read().await.iter().find(|gym| gym.id == id).cloned())
    }

    async fn create(&self, gym: &Gym) -> AppResult<Gym> {
        let mut gyms = self.gyms.write().await;
        // Same outcome as the gyms_pkey violation in PostgreSQL.
        if gyms.iter().any(|existing| existing.id == gym.id) {
            return Err(AppError::Conflict("gym already exists".to_string()));
        }
        gyms.push(gym.clone());
        Ok(gym.clone())
    }
}

#[derive(Default)]
pub struct InMemoryCheckInRepository {
    check_ins: RwLock<Vec<CheckIn>>,
}

impl InMemoryCheckInRepository {
    pub async fn all(&self) -> Vec<CheckIn> {
        self.check_ins.read().await.clone()
    }
}

#[async_trait]
impl CheckInRepository for InMemoryCheckInRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<CheckIn>> {
        Ok(self
            .check_ins
            .read()
            .await
            .iter()
            .find(|check_in| check_in.id == id)
            .cloned())
    }

    async fn find_by_user_id_on_date(
        &self,
        user_id: &str,
        day: &CalendarDay,
    ) -> AppResult<Option<CheckIn>> {
        Ok(self
            .check_ins
            .read()
            .await
            .iter()
            .find(|check_in| check_in.user_id == user_id && day.contains(check_in.created_at))
            .cloned())
    }

    async fn create(&self, check_in: &NewCheckIn) -> AppResult<CheckIn> {
        let created = CheckIn {
            id: Uuid::new_v4().to_string(),
            user_id: check_in.user_id.clone(),
            gym_id: check_in.gym_id.clone(),
            created_at: check_in.created_at,
            validated_at: None,
        };
        self.check_ins.write().await.push(created.clone());
        Ok(created)
    }
}
