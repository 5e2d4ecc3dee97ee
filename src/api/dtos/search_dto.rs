use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::catalog_dto::UserSkillResponse;

#[derive(Debug, Default, Deserialize)]
pub struct SearchUsersQuery {
    pub skills: Option<String>,
    pub job_type: Option<String>,
}

/// Public search card; email and phone stay private.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSearchResult {
    pub id: Uuid,
    pub name: String,
    pub profile_picture: Option<String>,
    pub skills: Vec<UserSkillResponse>,
}
