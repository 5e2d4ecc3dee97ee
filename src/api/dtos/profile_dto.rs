use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{ProfileChanges, User};

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub profile_picture: Option<String>,
}

impl From<&User> for ProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            phone: user.phone.clone(),
            profile_picture: user.profile_picture.clone(),
        }
    }
}

/// Reference to an image already stored by the media service.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProfilePictureInput {
    #[validate(url(message = "Enter a valid URL."))]
    pub url: String,
    #[validate(custom(function = "crate::utils::validators::validate_image_extension"))]
    pub file_name: String,
    #[validate(range(max = 512000, message = "Image size exceeds the limit of 500KB."))]
    pub size_bytes: u64,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(custom(function = "crate::utils::validators::validate_display_name"))]
    pub name: Option<String>,
    #[validate(custom(function = "crate::utils::validators::validate_phone"))]
    pub phone: Option<String>,
    #[validate(nested)]
    pub profile_picture: Option<ProfilePictureInput>,
}

impl From<UpdateProfileRequest> for ProfileChanges {
    fn from(request: UpdateProfileRequest) -> Self {
        Self {
            name: request.name.map(|name| name.trim().to_string()),
            phone: request.phone,
            profile_picture: request.profile_picture.map(|picture| picture.url),
        }
    }
}
