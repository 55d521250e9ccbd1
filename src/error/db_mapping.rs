use super::app_error::AppError;
use super::conversions::database_unavailable;

/// Translates a PostgreSQL SQLSTATE into a typed error, or `None` when the
/// code has no dedicated mapping.
pub(super) fn map_database_error(
    code: Option<&str>,
    constraint: Option<&str>,
    message: &str,
) -> Option<AppError> {
    match code? {
        "23505" => Some(AppError::Conflict(
            conflict_message_from_constraint(constraint).to_string(),
        )),
        "23502" => Some(AppError::validation_error(
            required_field_message_from_db(message)
                .unwrap_or_else(|| "required field is missing".to_string()),
        )),
        "23503" => Some(AppError::BadRequest(
            foreign_key_message_from_constraint(constraint).to_string(),
        )),
        "23514" => Some(AppError::validation_error(
            "request violates validation rules",
        )),
        "22P02" => Some(AppError::validation_error("invalid input format")),
        "08001" | "08006" => Some(database_unavailable(
            "Unable to connect to database. Please try again later.",
        )),
        "53300" => Some(database_unavailable(
            "Service temporarily unavailable. Please try again later.",
        )),
        _ => None,
    }
}

pub(super) fn conflict_message_from_constraint(constraint: Option<&str>) -> &'static str {
    match constraint {
        Some("gyms_pkey") => "gym already exists",
        Some("check_ins_pkey") => "check-in already exists",
        _ => "resource already exists",
    }
}

pub(super) fn foreign_key_message_from_constraint(constraint: Option<&str>) -> &'static str {
    match constraint {
        Some("check_ins_gym_id_fkey") => "referenced gym does not exist",
        _ => "referenced resource does not exist",
    }
}

pub(super) fn required_field_message_from_db(message: &str) -> Option<String> {
    let marker = "column \"";
    let rest = &message[message.find(marker)? + marker.len()..];
    let field = &rest[..rest.find('"')?];
    Some(format!("{field} is required"))
}
