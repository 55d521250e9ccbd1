mod check_in_service;

pub use check_in_service::{CheckInInput, CheckInOutput, CheckInService};
