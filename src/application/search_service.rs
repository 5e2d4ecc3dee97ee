use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::api::dtos::{SearchUsersQuery, UserSearchResult, UserSkillResponse};
use crate::domain::{CatalogKind, JobType};
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::{
    AssociationRepository, UserRepository, UserSearchFilter,
};

#[derive(Clone)]
pub struct SearchService {
    user_repo: Arc<dyn UserRepository>,
    association_repo: Arc<dyn AssociationRepository>,
}

impl SearchService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        association_repo: Arc<dyn AssociationRepository>,
    ) -> Self {
        Self {
            user_repo,
            association_repo,
        }
    }

    pub async fn search(&self, query: SearchUsersQuery) -> AppResult<Vec<UserSearchResult>> {
        let job_type = match non_blank(query.job_type) {
            Some(label) => match label.parse::<JobType>() {
                Ok(job_type) => Some(job_type),
                Err(_) => {
                    debug!(job_type = %label, "unknown job type matches no users");
                    return Err(no_matches());
                }
            },
            None => None,
        };
        let filter = UserSearchFilter {
            skill: non_blank(query.skills),
            job_type,
        };

        debug!(filtered = filter.has_filters(), "searching users");
        let users = self.user_repo.search(&filter).await?;
        if users.is_empty() {
            return Err(no_matches());
        }

        let user_ids: Vec<Uuid> = users.iter().map(|user| user.id).collect();
        let mut skills_by_user: HashMap<Uuid, Vec<UserSkillResponse>> = HashMap::new();
        for association in self
            .association_repo
            .list_for_users(CatalogKind::Skill, &user_ids)
            .await?
        {
            skills_by_user
                .entry(association.user_id)
                .or_default()
                .push(UserSkillResponse::from(&association));
        }

        Ok(users
            .into_iter()
            .map(|user| UserSearchResult {
                skills: skills_by_user.remove(&user.id).unwrap_or_default(),
                id: user.id,
                name: user.name,
                profile_picture: user.profile_picture,
            })
            .collect())
    }
}

fn no_matches() -> AppError {
    AppError::NotFound("No users found matching the criteria.".to_string())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
