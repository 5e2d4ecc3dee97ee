use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

pub const MAX_IMAGE_SIZE_BYTES: u64 = 500 * 1024;
pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 3] = [".jpg", ".jpeg", ".png"];

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?1?\d{9,15}$").expect("compile phone regex"));
static SPECIAL_CHAR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[!@#$%^&*(),.?":{}|<>]"#).expect("compile special character regex"));

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_REGEX.is_match(phone) {
        return Ok(());
    }
    Err(error(
        "phone",
        "Phone number must be entered in the format: '+999999999'. Up to 15 digits allowed.",
    ))
}

pub const MAX_NAME_CHARS: usize = 50;

pub fn validate_display_name(name: &str) -> Result<(), ValidationError> {
    let length = name.trim().chars().count();
    if (1..=MAX_NAME_CHARS).contains(&length) {
        return Ok(());
    }
    Err(error("name", "Name must be 1-50 characters"))
}

pub fn validate_password_complexity(password: &str) -> Result<(), ValidationError> {
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(error(
            "password_digit",
            "Password must contain at least one digit.",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(error(
            "password_letter",
            "Password must contain at least one letter.",
        ));
    }
    if !SPECIAL_CHAR_REGEX.is_match(password) {
        return Err(error(
            "password_special",
            "Password must contain at least one special character.",
        ));
    }
    Ok(())
}

pub fn validate_image_extension(file_name: &str) -> Result<(), ValidationError> {
    let lower = file_name.to_ascii_lowercase();
    if ALLOWED_IMAGE_EXTENSIONS
        .iter()
        .any(|extension| lower.ends_with(extension) && lower.len() > extension.len())
    {
        return Ok(());
    }
    Err(error(
        "image_extension",
        "Invalid file type. Only '.jpg', '.jpeg', and '.png' are allowed.",
    ))
}
