use super::traits::WorkExperienceRepository;
use crate::domain::WorkExperience;
use crate::error::AppResult;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

const COLUMNS: &str = "id, user_id, job_title, company_name, location, job_type, start_date, \
     end_date, description, created_at, updated_at";

pub struct WorkExperienceRepositoryImpl {
    pool: PgPool,
}

impl WorkExperienceRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkExperienceRepository for WorkExperienceRepositoryImpl {
    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<WorkExperience>> {
        let experiences = sqlx::query_as::<_, WorkExperience>(&format!(
            "SELECT {COLUMNS} FROM work_experiences WHERE user_id = $1 ORDER BY start_date DESC, created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(experiences)
    }

    async fn find_owned(&self, id: Uuid, user_id: Uuid) -> AppResult<Option<WorkExperience>> {
        let experience = sqlx::query_as::<_, WorkExperience>(&format!(
            "SELECT {COLUMNS} FROM work_experiences WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(experience)
    }

    async fn create(&self, experience: &WorkExperience) -> AppResult<WorkExperience> {
        let created = sqlx::query_as::<_, WorkExperience>(&format!(
            r#"
            INSERT INTO work_experiences ({COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(experience.id)
        .bind(experience.user_id)
        .bind(&experience.job_title)
        .bind(&experience.company_name)
        .bind(&experience.location)
        .bind(experience.job_type)
        .bind(experience.start_date)
        .bind(experience.end_date)
        .bind(&experience.description)
        .bind(experience.created_at)
        .bind(experience.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn update_owned(&self, experience: &WorkExperience) -> AppResult<Option<WorkExperience>> {
        let updated = sqlx::query_as::<_, WorkExperience>(&format!(
            r#"
            UPDATE work_experiences
            SET job_title = $3, company_name = $4, location = $5, job_type = $6,
                start_date = $7, end_date = $8, description = $9, updated_at = $10
            WHERE id = $1 AND user_id = $2
            RETURNING {COLUMNS}
            "#
        ))
        .bind(experience.id)
        .bind(experience.user_id)
        .bind(&experience.job_title)
        .bind(&experience.company_name)
        .bind(&experience.location)
        .bind(experience.job_type)
        .bind(experience.start_date)
        .bind(experience.end_date)
        .bind(&experience.description)
        .bind(experience.updated_at)
        .fetch_optional(&self.pool)
        .await?;
        Ok(updated)
    }

    async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM work_experiences WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
