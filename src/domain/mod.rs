pub mod check_in;
pub mod errors;
pub mod geo;
pub mod gym;

pub use check_in::{CalendarDay, CheckIn, NewCheckIn};
pub use errors::DomainError;
pub use geo::{distance_between_coordinates, Coordinate};
pub use gym::Gym;

/// Farthest a user may stand from a gym and still check in, inclusive.
pub const MAX_DISTANCE_IN_KILOMETERS: f64 = 0.1;
