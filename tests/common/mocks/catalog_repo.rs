use async_trait::async_trait;
use chrono::Utc;
use skills_backend::domain::{CatalogItem, CatalogKind};
use skills_backend::error::AppResult;
use skills_backend::infrastructure::repositories::CatalogRepository;
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
pub struct MockCatalogRepo {
    pub items: Mutex<Vec<(CatalogKind, CatalogItem)>>,
}

impl MockCatalogRepo {
    pub fn seed(&self, kind: CatalogKind, name: &str) -> CatalogItem {
        let item = CatalogItem {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        self.items
            .lock()
            .expect("catalog mutex poisoned")
            .push((kind, item.clone()));
        item
    }

    pub fn count(&self, kind: CatalogKind) -> usize {
        self.items
            .lock()
            .expect("catalog mutex poisoned")
            .iter()
            .filter(|(item_kind, _)| *item_kind == kind)
            .count()
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<CatalogItem> {
        self.items
            .lock()
            .expect("catalog mutex poisoned")
            .iter()
            .find(|(_, item)| item.id == id)
            .map(|(_, item)| item.clone())
    }
}

#[async_trait]
impl CatalogRepository for MockCatalogRepo {
    async fn list(&self, kind: CatalogKind) -> AppResult<Vec<CatalogItem>> {
        Ok(self
            .items
            .lock()
            .expect("catalog mutex poisoned")
            .iter()
            .filter(|(item_kind, _)| *item_kind == kind)
            .map(|(_, item)| item.clone())
            .collect())
    }

    async fn find_by_name(&self, kind: CatalogKind, name: &str) -> AppResult<Option<CatalogItem>> {
        Ok(self
            .items
            .lock()
            .expect("catalog mutex poisoned")
            .iter()
            .find(|(item_kind, item)| *item_kind == kind && item.name.eq_ignore_ascii_case(name))
            .map(|(_, item)| item.clone()))
    }

    async fn get_or_create(&self, kind: CatalogKind, name: &str) -> AppResult<(CatalogItem, bool)> {
        let existing = self
            .items
            .lock()
            .expect("catalog mutex poisoned")
            .iter()
            .find(|(item_kind, item)| *item_kind == kind && item.name == name)
            .map(|(_, item)| item.clone());

        match existing {
            Some(item) => Ok((item, false)),
            None => Ok((self.seed(kind, name), true)),
        }
    }
}
