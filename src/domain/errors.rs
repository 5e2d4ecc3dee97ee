use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid {field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },
}
