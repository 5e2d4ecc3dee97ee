use crate::domain::DomainError;
use crate::error::app_error::AppError;
use crate::error::db_mapping::map_database_error;
use crate::error::validation_mapping::collect_validation_issues;

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidField { field, message } => AppError::invalid_field(field, message),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError(err)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_) => AppError::ServiceUnavailable {
                service: "database".to_string(),
                message: "Unable to connect to database. Please try again later.".to_string(),
            },
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => AppError::ServiceUnavailable {
                service: "database".to_string(),
                message: "Service temporarily unavailable. Please try again later.".to_string(),
            },
            sqlx::Error::Database(database_error) => {
                match map_database_error(
                    database_error.code().as_deref(),
                    database_error.constraint(),
                    database_error.message(),
                ) {
                    Some(mapped) => mapped,
                    None => AppError::DatabaseError(sqlx::Error::Database(database_error)),
                }
            }
            other => AppError::DatabaseError(other),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut issues = Vec::new();
        collect_validation_issues(None, &err, &mut issues);
        issues.sort_by(|left, right| {
            left.field
                .cmp(&right.field)
                .then(left.code.cmp(&right.code))
        });

        let message = match issues.as_slice() {
            [issue] => issue.message.clone(),
            _ => "Request validation failed".to_string(),
        };

        AppError::ValidationError { message, issues }
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
            _ => AppError::InvalidToken,
        }
    }
}
