use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::CheckIn;

/// Body of `POST /gyms/{gym_id}/check-ins`. The caller is trusted to have
/// authenticated `user_id` upstream.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCheckInRequest {
    #[validate(length(min = 1, message = "user_id must not be empty"))]
    pub user_id: String,

    #[validate(range(min = -90.0, max = 90.0, message = "latitude must be within [-90, 90]"))]
    pub latitude: f64,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "longitude must be within [-180, 180]"
    ))]
    pub longitude: f64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckInDto {
    pub id: String,
    pub user_id: String,
    pub gym_id: String,
    pub created_at: DateTime<Utc>,
    pub validated_at: Option<DateTime<Utc>>,
}

impl From<CheckIn> for CheckInDto {
    fn from(check_in: CheckIn) -> Self {
        Self {
            id: check_in.id,
            user_id: check_in.user_id,
            gym_id: check_in.gym_id,
            created_at: check_in.created_at,
            validated_at: check_in.validated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckInResponse {
    pub check_in: CheckInDto,
}
