use crate::domain::{
    AuthIdentity, AuthProvider, CatalogItem, CatalogKind, ExternalProfile, JobType,
    UserAssociation, User, UserSession, WorkExperience,
};
use crate::error::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSearchFilter {
    pub skill: Option<String>,
    pub job_type: Option<JobType>,
}

impl UserSearchFilter {
    pub fn has_filters(&self) -> bool {
        self.skill.is_some() || self.job_type.is_some()
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
    /// Inserts the user and its first identity in one transaction.
    async fn create_with_identity(&self, user: &User, identity: &AuthIdentity) -> AppResult<User>;
    async fn update(&self, user: &User) -> AppResult<User>;
    /// Returns the user owning `profile.email`, creating it and linking the
    /// provider identity atomically. A disabled account is rejected before
    /// anything is linked.
    async fn find_or_create_external(&self, profile: &ExternalProfile) -> AppResult<User>;
    async fn search(&self, filter: &UserSearchFilter) -> AppResult<Vec<User>>;
}

#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn find_identity_by_user_id(
        &self,
        user_id: Uuid,
        provider: AuthProvider,
    ) -> AppResult<Option<AuthIdentity>>;
    async fn create_session(&self, session: &UserSession) -> AppResult<UserSession>;
    async fn find_session_by_token_hash(&self, token_hash: &str) -> AppResult<Option<UserSession>>;
    /// Revokes a live session. Returns `false` if it was already revoked.
    async fn revoke_session(&self, id: Uuid, reason: &str) -> AppResult<bool>;
    async fn set_replaced_by(&self, id: Uuid, replaced_by: Uuid) -> AppResult<()>;
    async fn revoke_family(&self, family_id: Uuid, reason: &str) -> AppResult<()>;
    async fn touch_session(&self, id: Uuid) -> AppResult<()>;
}

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list(&self, kind: CatalogKind) -> AppResult<Vec<CatalogItem>>;
    async fn find_by_name(&self, kind: CatalogKind, name: &str) -> AppResult<Option<CatalogItem>>;
    /// Returns the entry and whether this call created it.
    async fn get_or_create(&self, kind: CatalogKind, name: &str) -> AppResult<(CatalogItem, bool)>;
}

#[async_trait]
pub trait AssociationRepository: Send + Sync {
    /// Links the user to the catalog entry; an existing link is returned unchanged.
    async fn attach(
        &self,
        kind: CatalogKind,
        user_id: Uuid,
        item_id: Uuid,
    ) -> AppResult<UserAssociation>;
    async fn list_for_user(&self, kind: CatalogKind, user_id: Uuid)
        -> AppResult<Vec<UserAssociation>>;
    async fn list_for_users(
        &self,
        kind: CatalogKind,
        user_ids: &[Uuid],
    ) -> AppResult<Vec<UserAssociation>>;
    /// Returns `false` when no row with `id` belongs to `user_id`.
    async fn delete_owned(&self, kind: CatalogKind, id: Uuid, user_id: Uuid) -> AppResult<bool>;
}

#[async_trait]
pub trait WorkExperienceRepository: Send + Sync {
    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<WorkExperience>>;
    async fn find_owned(&self, id: Uuid, user_id: Uuid) -> AppResult<Option<WorkExperience>>;
    async fn create(&self, experience: &WorkExperience) -> AppResult<WorkExperience>;
    /// Writes every mutable column, scoped to the owner. `None` when the row is gone
    /// or belongs to someone else.
    async fn update_owned(&self, experience: &WorkExperience) -> AppResult<Option<WorkExperience>>;
    async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> AppResult<bool>;
}
