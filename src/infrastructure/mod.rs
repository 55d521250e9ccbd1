pub mod clock;
pub mod db;
pub mod repositories;

pub use clock::{Clock, FixedClock, SystemClock};
