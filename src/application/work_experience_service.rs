use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::api::dtos::{
    CreateWorkExperienceRequest, UpdateWorkExperienceRequest, WorkExperienceResponse,
};
use crate::domain::{ensure_date_range, WorkExperience, WorkExperienceChanges};
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::WorkExperienceRepository;

const NOT_FOUND: &str = "Work experience not found.";
const NONE_FOR_USER: &str = "No work experiences found for this user.";

#[derive(Clone)]
pub struct WorkExperienceService {
    work_repo: Arc<dyn WorkExperienceRepository>,
}

impl WorkExperienceService {
    pub fn new(work_repo: Arc<dyn WorkExperienceRepository>) -> Self {
        Self { work_repo }
    }

    pub async fn list(&self, user_id: Uuid) -> AppResult<Vec<WorkExperienceResponse>> {
        let experiences = self.work_repo.list_for_user(user_id).await?;
        if experiences.is_empty() {
            return Err(AppError::NotFound(NONE_FOR_USER.to_string()));
        }
        Ok(experiences.iter().map(WorkExperienceResponse::from).collect())
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        request: CreateWorkExperienceRequest,
    ) -> AppResult<WorkExperienceResponse> {
        request.validate()?;
        ensure_date_range(request.start_date, request.end_date)?;

        let now = Utc::now();
        let experience = WorkExperience {
            id: Uuid::new_v4(),
            user_id,
            job_title: request.job_title,
            company_name: request.company_name,
            location: request.location,
            job_type: request.job_type,
            start_date: request.start_date,
            end_date: request.end_date,
            description: request.description,
            created_at: now,
            updated_at: now,
        };

        let created = self.work_repo.create(&experience).await?;
        info!(user_id = %user_id, work_experience_id = %created.id, "work experience created");
        Ok(WorkExperienceResponse::from(&created))
    }

    pub async fn get(&self, user_id: Uuid, id: Uuid) -> AppResult<WorkExperienceResponse> {
        let experience = self.find_owned(user_id, id).await?;
        Ok(WorkExperienceResponse::from(&experience))
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        request: UpdateWorkExperienceRequest,
    ) -> AppResult<WorkExperienceResponse> {
        request.validate()?;

        let current = self.find_owned(user_id, id).await?;
        let merged = WorkExperienceChanges::from(request).apply_to(&current, Utc::now())?;

        let updated = self
            .work_repo
            .update_owned(&merged)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
        info!(user_id = %user_id, work_experience_id = %id, "work experience updated");
        Ok(WorkExperienceResponse::from(&updated))
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> AppResult<()> {
        if !self.work_repo.delete_owned(id, user_id).await? {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }
        info!(user_id = %user_id, work_experience_id = %id, "work experience deleted");
        Ok(())
    }

    async fn find_owned(&self, user_id: Uuid, id: Uuid) -> AppResult<WorkExperience> {
        self.work_repo
            .find_owned(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }
}
