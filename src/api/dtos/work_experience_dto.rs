use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{JobType, WorkExperience, WorkExperienceChanges};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateWorkExperienceRequest {
    #[validate(length(min = 1, max = 100, message = "Job title must be 1-100 characters"))]
    pub job_title: String,
    #[validate(length(min = 1, max = 100, message = "Company name must be 1-100 characters"))]
    pub company_name: String,
    #[validate(length(max = 100, message = "Location must be at most 100 characters"))]
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateWorkExperienceRequest {
    #[validate(length(min = 1, max = 100, message = "Job title must be 1-100 characters"))]
    pub job_title: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Company name must be 1-100 characters"))]
    pub company_name: Option<String>,
    #[validate(length(max = 100, message = "Location must be at most 100 characters"))]
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl From<UpdateWorkExperienceRequest> for WorkExperienceChanges {
    fn from(request: UpdateWorkExperienceRequest) -> Self {
        Self {
            job_title: request.job_title,
            company_name: request.company_name,
            location: request.location,
            job_type: request.job_type,
            start_date: request.start_date,
            end_date: request.end_date,
            description: request.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkExperienceResponse {
    pub id: Uuid,
    pub job_title: String,
    pub company_name: String,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl From<&WorkExperience> for WorkExperienceResponse {
    fn from(experience: &WorkExperience) -> Self {
        Self {
            id: experience.id,
            job_title: experience.job_title.clone(),
            company_name: experience.company_name.clone(),
            location: experience.location.clone(),
            job_type: experience.job_type,
            start_date: experience.start_date,
            end_date: experience.end_date,
            description: experience.description.clone(),
        }
    }
}
