use async_trait::async_trait;
use chrono::Utc;
use skills_backend::domain::{AuthIdentity, CatalogKind, ExternalProfile, User};
use skills_backend::error::{AppError, AppResult};
use skills_backend::infrastructure::repositories::{UserRepository, UserSearchFilter};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use super::association_repo::MockAssociationRepo;
use super::auth_repo::MockAuthRepo;
use super::work_repo::MockWorkRepo;

#[derive(Default)]
pub struct MockUserRepo {
    pub users: Mutex<Vec<User>>,
    auth: Arc<MockAuthRepo>,
    associations: Arc<MockAssociationRepo>,
    work: Arc<MockWorkRepo>,
}

impl MockUserRepo {
    pub fn new(
        auth: Arc<MockAuthRepo>,
        associations: Arc<MockAssociationRepo>,
        work: Arc<MockWorkRepo>,
    ) -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            auth,
            associations,
            work,
        }
    }

    pub fn push(&self, user: User) {
        self.users.lock().expect("users mutex poisoned").push(user);
    }

    pub fn count(&self) -> usize {
        self.users.lock().expect("users mutex poisoned").len()
    }

    pub fn set_active(&self, id: Uuid, is_active: bool) {
        let mut users = self.users.lock().expect("users mutex poisoned");
        if let Some(user) = users.iter_mut().find(|user| user.id == id) {
            user.is_active = is_active;
        }
    }
}

#[async_trait]
impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .expect("users mutex poisoned")
            .iter()
            .find(|user| user.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .expect("users mutex poisoned")
            .iter()
            .find(|user| user.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn create_with_identity(&self, user: &User, identity: &AuthIdentity) -> AppResult<User> {
        let mut users = self.users.lock().expect("users mutex poisoned");
        if users.iter().any(|existing| existing.email == user.email) {
            return Err(AppError::Conflict("email already registered".to_string()));
        }
        users.push(user.clone());
        self.auth.push_identity(identity.clone());
        Ok(user.clone())
    }

    async fn update(&self, user: &User) -> AppResult<User> {
        let mut users = self.users.lock().expect("users mutex poisoned");
        let slot = users
            .iter_mut()
            .find(|stored| stored.id == user.id)
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))?;
        *slot = user.clone();
        Ok(user.clone())
    }

    async fn find_or_create_external(&self, profile: &ExternalProfile) -> AppResult<User> {
        let now = Utc::now();
        let user = {
            let mut users = self.users.lock().expect("users mutex poisoned");
            match users.iter().find(|user| user.email == profile.email) {
                Some(existing) => existing.clone(),
                None => {
                    let user = User {
                        id: Uuid::new_v4(),
                        email: profile.email.clone(),
                        name: profile.name.clone().unwrap_or_else(|| "Google User".to_string()),
                        phone: None,
                        profile_picture: profile.picture.clone(),
                        is_active: true,
                        created_at: now,
                        updated_at: now,
                    };
                    users.push(user.clone());
                    user
                }
            }
        };
        if !user.is_active {
            return Err(AppError::ExternalAuthFailed(
                "User account is disabled.".to_string(),
            ));
        }

        let mut identities = self.auth.identities.lock().expect("identities mutex poisoned");
        let linked = identities.iter().any(|identity| {
            identity.provider == profile.provider
                && identity.provider_id.as_deref() == Some(profile.provider_id.as_str())
        });
        if !linked {
            identities.push(AuthIdentity {
                id: Uuid::new_v4(),
                user_id: user.id,
                provider: profile.provider,
                provider_id: Some(profile.provider_id.clone()),
                password_hash: None,
                verified: profile.email_verified,
                created_at: now,
            });
        }
        Ok(user)
    }

    async fn search(&self, filter: &UserSearchFilter) -> AppResult<Vec<User>> {
        let users = self.users.lock().expect("users mutex poisoned").clone();
        Ok(users
            .into_iter()
            .filter(|user| {
                filter.skill.as_deref().map_or(true, |skill| {
                    self.associations
                        .has_item_matching(CatalogKind::Skill, user.id, skill)
                })
            })
            .filter(|user| {
                filter
                    .job_type
                    .map_or(true, |job_type| self.work.has_job_type(user.id, job_type))
            })
            .collect())
    }
}
