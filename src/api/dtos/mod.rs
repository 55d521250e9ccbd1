pub mod check_in_dto;

pub use check_in_dto::*;
