use std::sync::Arc;

use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::api::dtos::{
    AddUserInterestRequest, AddUserSkillRequest, CatalogItemResponse, UserInterestResponse,
    UserSkillResponse,
};
use crate::domain::{CatalogKind, UserAssociation};
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::{AssociationRepository, CatalogRepository};

#[derive(Clone)]
pub struct CatalogService {
    catalog_repo: Arc<dyn CatalogRepository>,
    association_repo: Arc<dyn AssociationRepository>,
}

impl CatalogService {
    pub fn new(
        catalog_repo: Arc<dyn CatalogRepository>,
        association_repo: Arc<dyn AssociationRepository>,
    ) -> Self {
        Self {
            catalog_repo,
            association_repo,
        }
    }

    pub async fn list(&self, kind: CatalogKind) -> AppResult<Vec<CatalogItemResponse>> {
        let items = self.catalog_repo.list(kind).await?;
        Ok(items.iter().map(CatalogItemResponse::from).collect())
    }

    pub async fn add_user_skill(
        &self,
        user_id: Uuid,
        request: AddUserSkillRequest,
    ) -> AppResult<UserSkillResponse> {
        request.validate()?;
        let association = self.attach(CatalogKind::Skill, user_id, &request.skill).await?;
        Ok(UserSkillResponse::from(&association))
    }

    pub async fn add_user_interest(
        &self,
        user_id: Uuid,
        request: AddUserInterestRequest,
    ) -> AppResult<UserInterestResponse> {
        request.validate()?;
        let association = self
            .attach(CatalogKind::Interest, user_id, &request.interest)
            .await?;
        Ok(UserInterestResponse::from(&association))
    }

    pub async fn list_user_skills(&self, user_id: Uuid) -> AppResult<Vec<UserSkillResponse>> {
        let associations = self
            .association_repo
            .list_for_user(CatalogKind::Skill, user_id)
            .await?;
        Ok(associations.iter().map(UserSkillResponse::from).collect())
    }

    pub async fn list_user_interests(
        &self,
        user_id: Uuid,
    ) -> AppResult<Vec<UserInterestResponse>> {
        let associations = self
            .association_repo
            .list_for_user(CatalogKind::Interest, user_id)
            .await?;
        Ok(associations.iter().map(UserInterestResponse::from).collect())
    }

    /// Rows owned by someone else are reported exactly like missing rows.
    pub async fn remove(&self, kind: CatalogKind, user_id: Uuid, id: Uuid) -> AppResult<()> {
        if !self.association_repo.delete_owned(kind, id, user_id).await? {
            return Err(AppError::NotFound(format!(
                "User {} not found.",
                kind.label()
            )));
        }
        info!(user_id = %user_id, association_id = %id, kind = kind.label(), "association removed");
        Ok(())
    }

    async fn attach(
        &self,
        kind: CatalogKind,
        user_id: Uuid,
        name: &str,
    ) -> AppResult<UserAssociation> {
        let item = self
            .catalog_repo
            .find_by_name(kind, name.trim())
            .await?
            .ok_or_else(|| AppError::NotFound(not_found_message(kind, name.trim())))?;

        let association = self.association_repo.attach(kind, user_id, item.id).await?;
        info!(
            user_id = %user_id,
            item_id = %item.id,
            kind = kind.label(),
            "association attached"
        );
        Ok(association)
    }
}

fn not_found_message(kind: CatalogKind, name: &str) -> String {
    match kind {
        CatalogKind::Skill => format!("Skill '{name}' not found."),
        CatalogKind::Interest => format!("Interest '{name}' not found."),
    }
}
