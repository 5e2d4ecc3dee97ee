use async_trait::async_trait;
use skills_backend::domain::{JobType, WorkExperience};
use skills_backend::error::AppResult;
use skills_backend::infrastructure::repositories::WorkExperienceRepository;
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
pub struct MockWorkRepo {
    pub experiences: Mutex<Vec<WorkExperience>>,
}

impl MockWorkRepo {
    pub fn push(&self, experience: WorkExperience) {
        self.experiences
            .lock()
            .expect("work mutex poisoned")
            .push(experience);
    }

    pub fn count(&self) -> usize {
        self.experiences.lock().expect("work mutex poisoned").len()
    }

    pub fn has_job_type(&self, user_id: Uuid, job_type: JobType) -> bool {
        self.experiences
            .lock()
            .expect("work mutex poisoned")
            .iter()
            .any(|experience| experience.user_id == user_id && experience.job_type == Some(job_type))
    }
}

#[async_trait]
impl WorkExperienceRepository for MockWorkRepo {
    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<WorkExperience>> {
        Ok(self
            .experiences
            .lock()
            .expect("work mutex poisoned")
            .iter()
            .filter(|experience| experience.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_owned(&self, id: Uuid, user_id: Uuid) -> AppResult<Option<WorkExperience>> {
        Ok(self
            .experiences
            .lock()
            .expect("work mutex poisoned")
            .iter()
            .find(|experience| experience.id == id && experience.user_id == user_id)
            .cloned())
    }

    async fn create(&self, experience: &WorkExperience) -> AppResult<WorkExperience> {
        self.push(experience.clone());
        Ok(experience.clone())
    }

    async fn update_owned(&self, experience: &WorkExperience) -> AppResult<Option<WorkExperience>> {
        let mut experiences = self.experiences.lock().expect("work mutex poisoned");
        let Some(slot) = experiences
            .iter_mut()
            .find(|stored| stored.id == experience.id && stored.user_id == experience.user_id)
        else {
            return Ok(None);
        };
        *slot = experience.clone();
        Ok(Some(experience.clone()))
    }

    async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let mut experiences = self.experiences.lock().expect("work mutex poisoned");
        let before = experiences.len();
        experiences.retain(|experience| !(experience.id == id && experience.user_id == user_id));
        Ok(experiences.len() < before)
    }
}
