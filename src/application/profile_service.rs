use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::api::dtos::{ProfileResponse, UpdateProfileRequest};
use crate::domain::{ProfileChanges, User};
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::UserRepository;

#[derive(Clone)]
pub struct ProfileService {
    user_repo: Arc<dyn UserRepository>,
}

impl ProfileService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn get_profile(&self, user_id: Uuid) -> AppResult<ProfileResponse> {
        let user = self.load_active(user_id).await?;
        Ok(ProfileResponse::from(&user))
    }

    pub async fn update_profile(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> AppResult<ProfileResponse> {
        request.validate()?;

        let user = self.load_active(user_id).await?;
        let changes = ProfileChanges::from(request);
        if changes.is_empty() {
            return Ok(ProfileResponse::from(&user));
        }

        let updated = self
            .user_repo
            .update(&changes.apply_to(&user, Utc::now()))
            .await?;
        info!(user_id = %updated.id, "profile updated");
        Ok(ProfileResponse::from(&updated))
    }

    async fn load_active(&self, user_id: Uuid) -> AppResult<User> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .filter(|user| user.is_active)
            .ok_or(AppError::Unauthorized)
    }
}
