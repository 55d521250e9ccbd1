mod check_in_repository;
mod gym_repository;
mod in_memory;
mod traits;

pub use check_in_repository::CheckInRepositoryImpl;
pub use gym_repository::GymRepositoryImpl;
pub use in_memory::{InMemoryCheckInRepository, InMemoryGymRepository};
pub use traits::{CheckInRepository, GymRepository};
