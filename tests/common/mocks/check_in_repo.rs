#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use gym_check_in::domain::{CalendarDay, CheckIn, NewCheckIn};
use gym_check_in::error::{AppError, AppResult};
use gym_check_in::infrastructure::repositories::CheckInRepository;
use uuid::Uuid;

/// Check-in store that remembers every day it was asked about.
#[derive(Default)]
pub struct RecordingCheckInRepo {
    pub check_ins: Mutex<Vec<CheckIn>>,
    pub queried_days: Mutex<Vec<CalendarDay>>,
    pub create_calls: AtomicUsize,
}

impl RecordingCheckInRepo {
    pub fn stored(&self) -> Vec<CheckIn> {
        self.check_ins
            .lock()
            .expect("check-ins mutex poisoned")
            .clone()
    }

    pub fn queried_days(&self) -> Vec<CalendarDay> {
        self.queried_days
            .lock()
            .expect("queried days mutex poisoned")
            .clone()
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CheckInRepository for RecordingCheckInRepo {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<CheckIn>> {
        Ok(self
            .check_ins
            .lock()
            .expect("check-ins mutex poisoned")
            .iter()
            .find(|check_in| check_in.id == id)
            .cloned())
    }

    async fn find_by_user_id_on_date(
        &self,
        user_id: &str,
        day: &CalendarDay,
    ) -> AppResult<Option<CheckIn>> {
        self.queried_days
            .lock()
            .expect("queried days mutex poisoned")
            .push(*day);
        Ok(self
            .check_ins
            .lock()
            .expect("check-ins mutex poisoned")
            .iter()
            .find(|check_in| check_in.user_id == user_id && day.contains(check_in.created_at))
            .cloned())
    }

    async fn create(&self, check_in: &NewCheckIn) -> AppResult<CheckIn> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let created = CheckIn {
            id: Uuid::new_v4().to_string(),
            user_id: check_in.user_id.clone(),
            gym_id: check_in.gym_id.clone(),
            created_at: check_in.created_at,
            validated_at: None,
        };
        self.check_ins
            .lock()
            .expect("check-ins mutex poisoned")
            .push(created.clone());
        Ok(created)
    }
}

/// Check-in store that reads fine but fails every write.
#[derive(Default)]
pub struct FailingCheckInRepo;

#[async_trait]
impl CheckInRepository for FailingCheckInRepo {
    async fn find_by_id(&self, _id: &str) -> AppResult<Option<CheckIn>> {
        Ok(None)
    }

    async fn find_by_user_id_on_date(
        &self,
        _user_id: &str,
        _day: &CalendarDay,
    ) -> AppResult<Option<CheckIn>> {
        Ok(None)
    }

    async fn create(&self, _check_in: &NewCheckIn) -> AppResult<CheckIn> {
        Err(AppError::DatabaseError(sqlx::Error::PoolTimedOut))
    }
}
