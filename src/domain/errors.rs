use thiserror::Error;

/// Reasons a check-in attempt is rejected. Each one is final for the request
/// that produced it; none is retried internally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Max distance reached: {distance_km:.3} km away, at most {max_distance_km} km allowed")]
    MaxDistance {
        distance_km: f64,
        max_distance_km: f64,
    },

    #[error("Max number of check-ins reached")]
    MaxNumberOfCheckIns,
}

impl DomainError {
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::ResourceNotFound(_) => "RESOURCE_NOT_FOUND",
            DomainError::MaxDistance { .. } => "MAX_DISTANCE",
            DomainError::MaxNumberOfCheckIns => "MAX_NUMBER_OF_CHECK_INS",
        }
    }
}
