use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(custom(function = "crate::utils::validators::validate_display_name"))]
    pub name: String,

    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,

    #[validate(custom(function = "crate::utils::validators::validate_password_complexity"))]
    pub password: String,

    #[validate(custom(function = "crate::utils::validators::validate_phone"))]
    pub phone: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub id: Uuid,
    pub message: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct GoogleLoginRequest {
    #[validate(length(min = 1, message = "Google token is required"))]
    pub token: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RefreshRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenPairResponse {
    pub access: String,
    pub refresh: String,
}
