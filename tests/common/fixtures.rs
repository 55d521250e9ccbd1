#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use gym_check_in::application::CheckInInput;
use gym_check_in::domain::Gym;

pub const GYM_ID: &str = "gym-01";
pub const USER_ID: &str = "user-01";
pub const MISSING_GYM_ID: &str = "non-existent-id";

pub const GYM_LATITUDE: f64 = -27.2092052;
pub const GYM_LONGITUDE: f64 = -49.6401091;
pub const DISTANT_LATITUDE: f64 = -27.0747279;
pub const DISTANT_LONGITUDE: f64 = -49.4889672;

pub fn test_gym() -> Gym {
    gym_at(GYM_ID, GYM_LATITUDE, GYM_LONGITUDE)
}

pub fn gym_at(id: &str, latitude: f64, longitude: f64) -> Gym {
    Gym {
        id: id.to_string(),
        title: "JavaScript Gym".to_string(),
        description: Some(String::new()),
        phone: Some(String::new()),
        latitude,
        longitude,
    }
}

/// A user standing on the gym's coordinates.
pub fn check_in_input(gym_id: &str, user_id: &str) -> CheckInInput {
    CheckInInput {
        user_id: user_id.to_string(),
        gym_id: gym_id.to_string(),
        user_latitude: GYM_LATITUDE,
        user_longitude: GYM_LONGITUDE,
    }
}

pub fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("valid test timestamp")
}
