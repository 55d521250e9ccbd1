#[allow(dead_code, unused_imports)]
pub mod check_in_repo;
#[allow(dead_code, unused_imports)]
pub mod gym_repo;

#[allow(dead_code, unused_imports)]
pub use check_in_repo::{FailingCheckInRepo, RecordingCheckInRepo};
#[allow(dead_code, unused_imports)]
pub use gym_repo::{FailingGymRepo, RecordingGymRepo};
