use super::traits::AssociationRepository;
use crate::domain::{CatalogKind, UserAssociation};
use crate::error::AppResult;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

pub struct AssociationRepositoryImpl {
    pool: PgPool,
}

impl AssociationRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn select_joined(kind: CatalogKind) -> String {
    format!(
        "SELECT a.id, a.user_id, a.{column} AS item_id, c.name AS item_name, a.created_at \
         FROM {association} a INNER JOIN {catalog} c ON c.id = a.{column}",
        column = kind.item_column(),
        association = kind.association_table(),
        catalog = kind.catalog_table(),
    )
}

#[async_trait]
impl AssociationRepository for AssociationRepositoryImpl {
    async fn attach(
        &self,
        kind: CatalogKind,
        user_id: Uuid,
        item_id: Uuid,
    ) -> AppResult<UserAssociation> {
        let association = sqlx::query_as::<_, UserAssociation>(&format!(
            r#"
            WITH link AS (
                INSERT INTO {association} (id, user_id, {column}, created_at)
                VALUES ($1, $2, $3, NOW())
                ON CONFLICT (user_id, {column}) DO UPDATE SET user_id = EXCLUDED.user_id
                RETURNING id, user_id, {column}, created_at
            )
            SELECT link.id, link.user_id, link.{column} AS item_id, c.name AS item_name, link.created_at
            FROM link INNER JOIN {catalog} c ON c.id = link.{column}
            "#,
            association = kind.association_table(),
            column = kind.item_column(),
            catalog = kind.catalog_table(),
        ))
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(item_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(association)
    }

    async fn list_for_user(
        &self,
        kind: CatalogKind,
        user_id: Uuid,
    ) -> AppResult<Vec<UserAssociation>> {
        let associations = sqlx::query_as::<_, UserAssociation>(&format!(
            "{} WHERE a.user_id = $1 ORDER BY a.created_at, a.id",
            select_joined(kind)
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(associations)
    }

    async fn list_for_users(
        &self,
        kind: CatalogKind,
        user_ids: &[Uuid],
    ) -> AppResult<Vec<UserAssociation>> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let associations = sqlx::query_as::<_, UserAssociation>(&format!(
            "{} WHERE a.user_id = ANY($1) ORDER BY a.created_at, a.id",
            select_joined(kind)
        ))
        .bind(user_ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(associations)
    }

    async fn delete_owned(&self, kind: CatalogKind, id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(&format!(
            "DELETE FROM {} WHERE id = $1 AND user_id = $2",
            kind.association_table()
        ))
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
