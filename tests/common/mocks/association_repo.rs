use async_trait::async_trait;
use chrono::Utc;
use skills_backend::domain::{CatalogKind, UserAssociation};
use skills_backend::error::{AppError, AppResult};
use skills_backend::infrastructure::repositories::AssociationRepository;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use super::catalog_repo::MockCatalogRepo;

#[derive(Default)]
pub struct MockAssociationRepo {
    pub catalog: Arc<MockCatalogRepo>,
    pub rows: Mutex<Vec<(CatalogKind, UserAssociation)>>,
}

impl MockAssociationRepo {
    pub fn new(catalog: Arc<MockCatalogRepo>) -> Self {
        Self {
            catalog,
            rows: Mutex::new(Vec::new()),
        }
    }

    pub fn count(&self, kind: CatalogKind) -> usize {
        self.rows
            .lock()
            .expect("associations mutex poisoned")
            .iter()
            .filter(|(row_kind, _)| *row_kind == kind)
            .count()
    }

    pub fn has_item_matching(&self, kind: CatalogKind, user_id: Uuid, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.rows
            .lock()
            .expect("associations mutex poisoned")
            .iter()
            .any(|(row_kind, row)| {
                *row_kind == kind
                    && row.user_id == user_id
                    && row.item_name.to_lowercase().contains(&needle)
            })
    }
}

#[async_trait]
impl AssociationRepository for MockAssociationRepo {
    async fn attach(
        &self,
        kind: CatalogKind,
        user_id: Uuid,
        item_id: Uuid,
    ) -> AppResult<UserAssociation> {
        let item = self
            .catalog
            .find_by_id(item_id)
            .ok_or_else(|| AppError::BadRequest("referenced record does not exist".to_string()))?;

        let mut rows = self.rows.lock().expect("associations mutex poisoned");
        if let Some((_, existing)) = rows.iter().find(|(row_kind, row)| {
            *row_kind == kind && row.user_id == user_id && row.item_id == item_id
        }) {
            return Ok(existing.clone());
        }

        let association = UserAssociation {
            id: Uuid::new_v4(),
            user_id,
            item_id,
            item_name: item.name,
            created_at: Utc::now(),
        };
        rows.push((kind, association.clone()));
        Ok(association)
    }

    async fn list_for_user(
        &self,
        kind: CatalogKind,
        user_id: Uuid,
    ) -> AppResult<Vec<UserAssociation>> {
        self.list_for_users(kind, &[user_id]).await
    }

    async fn list_for_users(
        &self,
        kind: CatalogKind,
        user_ids: &[Uuid],
    ) -> AppResult<Vec<UserAssociation>> {
        Ok(self
            .rows
            .lock()
            .expect("associations mutex poisoned")
            .iter()
            .filter(|(row_kind, row)| *row_kind == kind && user_ids.contains(&row.user_id))
            .map(|(_, row)| row.clone())
            .collect())
    }

    async fn delete_owned(&self, kind: CatalogKind, id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let mut rows = self.rows.lock().expect("associations mutex poisoned");
        let before = rows.len();
        rows.retain(|(row_kind, row)| !(*row_kind == kind && row.id == id && row.user_id == user_id));
        Ok(rows.len() < before)
    }
}
