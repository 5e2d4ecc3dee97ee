use crate::domain::DATE_RANGE_MESSAGE;

use super::app_error::AppError;

pub(super) fn map_database_error(
    code: Option<&str>,
    constraint: Option<&str>,
    message: &str,
) -> Option<AppError> {
    match code {
        Some("23505") => Some(AppError::Conflict(
            conflict_message_from_constraint(constraint).to_string(),
        )),
        Some("23502") => Some(AppError::validation_error(
            required_field_message_from_db(message)
                .unwrap_or_else(|| "required field is missing".to_string()),
        )),
        Some("23503") => Some(AppError::BadRequest(
            "referenced resource does not exist".to_string(),
        )),
        Some("23514") => Some(check_violation(constraint)),
        Some("22001") => Some(AppError::validation_error("value is too long")),
        Some("22P02") => Some(AppError::validation_error("invalid input format")),
        Some("08001") | Some("08006") => Some(AppError::ServiceUnavailable {
            service: "database".to_string(),
            message: "Unable to connect to database. Please try again later.".to_string(),
        }),
        Some("53300") => Some(AppError::ServiceUnavailable {
            service: "database".to_string(),
            message: "Service temporarily unavailable. Please try again later.".to_string(),
        }),
        _ => None,
    }
}

pub(super) fn conflict_message_from_constraint(constraint: Option<&str>) -> &'static str {
    match constraint {
        Some("users_email_key") => "email already registered",
        Some("uq_auth_identities_provider_id") => "identity already linked to another account",
        Some("auth_identities_user_id_provider_key") => "auth identity already exists",
        Some("skills_name_key") => "skill already exists",
        Some("interests_name_key") => "interest already exists",
        Some("user_skills_user_id_skill_id_key") => "skill already added",
        Some("user_interests_user_id_interest_id_key") => "interest already added",
        _ => "resource already exists",
    }
}

fn check_violation(constraint: Option<&str>) -> AppError {
    match constraint {
        Some("work_experiences_date_range_check") => {
            AppError::invalid_field("end_date", DATE_RANGE_MESSAGE)
        }
        _ => AppError::validation_error("request violates validation rules"),
    }
}

pub(super) fn required_field_message_from_db(message: &str) -> Option<String> {
    let marker = "column \"";
    let start = message.find(marker)?;
    let rest = &message[start + marker.len()..];
    let end = rest.find('"')?;
    let field = &rest[..end];
    Some(format!("{field} is required"))
}
