use super::traits::CatalogRepository;
use crate::domain::{CatalogItem, CatalogKind};
use crate::error::AppResult;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

pub struct CatalogRepositoryImpl {
    pool: PgPool,
}

impl CatalogRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryImpl {
    async fn list(&self, kind: CatalogKind) -> AppResult<Vec<CatalogItem>> {
        let items = sqlx::query_as::<_, CatalogItem>(&format!(
            "SELECT id, name, created_at FROM {} ORDER BY created_at, name",
            kind.catalog_table()
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    async fn find_by_name(&self, kind: CatalogKind, name: &str) -> AppResult<Option<CatalogItem>> {
        let item = sqlx::query_as::<_, CatalogItem>(&format!(
            "SELECT id, name, created_at FROM {} WHERE LOWER(name) = LOWER($1) LIMIT 1",
            kind.catalog_table()
        ))
        .bind(name.trim())
        .fetch_optional(&self.pool)
        .await?;
        Ok(item)
    }

    async fn get_or_create(&self, kind: CatalogKind, name: &str) -> AppResult<(CatalogItem, bool)> {
        let inserted = sqlx::query_as::<_, CatalogItem>(&format!(
            r#"
            INSERT INTO {} (id, name, created_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (name) DO NOTHING
            RETURNING id, name, created_at
            "#,
            kind.catalog_table()
        ))
        .bind(Uuid::new_v4())
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(item) = inserted {
            return Ok((item, true));
        }

        let existing = sqlx::query_as::<_, CatalogItem>(&format!(
            "SELECT id, name, created_at FROM {} WHERE name = $1",
            kind.catalog_table()
        ))
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok((existing, false))
    }
}
