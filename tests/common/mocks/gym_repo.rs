#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use gym_check_in::domain::Gym;
use gym_check_in::error::{AppError, AppResult};
use gym_check_in::infrastructure::repositories::GymRepository;

/// Gym store that counts lookups.
#[derive(Default)]
pub struct RecordingGymRepo {
    pub gyms: Mutex<Vec<Gym>>,
    pub find_calls: AtomicUsize,
}

impl RecordingGymRepo {
    pub fn with(gyms: Vec<Gym>) -> Self {
        Self {
            gyms: Mutex::new(gyms),
            find_calls: AtomicUsize::new(0),
        }
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GymRepository for RecordingGymRepo {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Gym>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .gyms
            .lock()
            .expect("gyms mutex poisoned")
            .iter()
            .find(|gym| gym.id == id)
            .cloned())
    }

    async fn create(&self, gym: &Gym) -> AppResult<Gym> {
        self.gyms
            .lock()
            .expect("gyms mutex poisoned")
            .push(gym.clone());
        Ok(gym.clone())
    }
}

/// Gym store whose backing database is down.
pub struct FailingGymRepo;

#[async_trait]
impl GymRepository for FailingGymRepo {
    async fn find_by_id(&self, _id: &str) -> AppResult<Option<Gym>> {
        Err(AppError::ServiceUnavailable {
            service: "database".to_string(),
            message: "gyms store unavailable".to_string(),
        })
    }

    async fn create(&self, _gym: &Gym) -> AppResult<Gym> {
        Err(AppError::ServiceUnavailable {
            service: "database".to_string(),
            message: "gyms store unavailable".to_string(),
        })
    }
}
