use super::search;
use super::traits::{AuthRepository, UserRepository, UserSearchFilter};
use crate::domain::{AuthIdentity, AuthProvider, ExternalProfile, User, UserSession};
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

const USER_COLUMNS: &str =
    "id, email, name, phone, profile_picture, is_active, created_at, updated_at";

pub struct UserRepositoryImpl {
    pool: PgPool,
}

impl UserRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE LOWER(email) = LOWER($1)"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn create_with_identity(&self, user: &User, identity: &AuthIdentity) -> AppResult<User> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (id, email, name, phone, profile_picture, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.phone)
        .bind(&user.profile_picture)
        .bind(user.is_active)
        .bind(user.created_at)
        .bind(user.updated_at)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO auth_identities (id, user_id, provider, provider_id, password_hash, verified, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(identity.id)
        .bind(created.id)
        .bind(identity.provider)
        .bind(&identity.provider_id)
        .bind(&identity.password_hash)
        .bind(identity.verified)
        .bind(identity.created_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(created)
    }

    async fn update(&self, user: &User) -> AppResult<User> {
        let updated = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users
            SET name = $2, phone = $3, profile_picture = $4, is_active = $5, updated_at = $6
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.phone)
        .bind(&user.profile_picture)
        .bind(user.is_active)
        .bind(user.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(updated)
    }

    async fn find_or_create_external(&self, profile: &ExternalProfile) -> AppResult<User> {
        let now = Utc::now();
        let display_name = profile
            .name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| profile.email.split('@').next().unwrap_or_default().to_string());
        let display_name: String = display_name.chars().take(50).collect();

        let mut tx = self.pool.begin().await?;

        // The no-op update makes RETURNING yield the existing row on conflict.
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (id, email, name, phone, profile_picture, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, NULL, $4, TRUE, $5, $5)
            ON CONFLICT (email) DO UPDATE SET email = EXCLUDED.email
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&profile.email)
        .bind(&display_name)
        .bind(&profile.picture)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        if !user.is_active {
            tx.rollback().await?;
            return Err(AppError::ExternalAuthFailed(
                "User account is disabled.".to_string(),
            ));
        }

        sqlx::query(
            r#"
            INSERT INTO auth_identities (id, user_id, provider, provider_id, password_hash, verified, created_at)
            VALUES ($1, $2, $3, $4, NULL, $5, $6)
            ON CONFLICT (provider, provider_id) WHERE provider_id IS NOT NULL
            DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user.id)
        .bind(profile.provider)
        .bind(&profile.provider_id)
        .bind(profile.email_verified)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(user)
    }

    async fn search(&self, filter: &UserSearchFilter) -> AppResult<Vec<User>> {
        search::search_users(&self.pool, filter).await
    }
}

const SESSION_COLUMNS: &str = "id, user_id, family_id, refresh_token_hash, expires_at, revoked_at, \
     replaced_by, revoked_reason, created_ip, last_seen_at, created_at";

pub struct AuthRepositoryImpl {
    pool: PgPool,
}

impl AuthRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn find_identity_by_user_id(
        &self,
        user_id: Uuid,
        provider: AuthProvider,
    ) -> AppResult<Option<AuthIdentity>> {
        let identity = sqlx::query_as::<_, AuthIdentity>(
            "SELECT id, user_id, provider, provider_id, password_hash, verified, created_at FROM auth_identities WHERE user_id = $1 AND provider = $2"
        )
        .bind(user_id)
        .bind(provider)
        .fetch_optional(&self.pool)
        .await?;
        Ok(identity)
    }

    async fn create_session(&self, session: &UserSession) -> AppResult<UserSession> {
        let created = sqlx::query_as::<_, UserSession>(&format!(
            r#"
            INSERT INTO user_sessions ({SESSION_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {SESSION_COLUMNS}
            "#
        ))
        .bind(session.id)
        .bind(session.user_id)
        .bind(session.family_id)
        .bind(&session.refresh_token_hash)
        .bind(session.expires_at)
        .bind(session.revoked_at)
        .bind(session.replaced_by)
        .bind(&session.revoked_reason)
        .bind(&session.created_ip)
        .bind(session.last_seen_at)
        .bind(session.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn find_session_by_token_hash(&self, token_hash: &str) -> AppResult<Option<UserSession>> {
        let session = sqlx::query_as::<_, UserSession>(&format!(
            "SELECT {SESSION_COLUMNS} FROM user_sessions WHERE refresh_token_hash = $1"
        ))
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await?;
        Ok(session)
    }

    async fn revoke_session(&self, id: Uuid, reason: &str) -> AppResult<bool> {
        let claimed = sqlx::query_scalar::<_, Uuid>(
            "UPDATE user_sessions SET revoked_at = NOW(), revoked_reason = $2 WHERE id = $1 AND revoked_at IS NULL RETURNING id",
        )
        .bind(id)
        .bind(reason)
        .fetch_optional(&self.pool)
        .await?;
        Ok(claimed.is_some())
    }

    async fn set_replaced_by(&self, id: Uuid, replaced_by: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE user_sessions SET replaced_by = $2 WHERE id = $1")
            .bind(id)
            .bind(replaced_by)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn revoke_family(&self, family_id: Uuid, reason: &str) -> AppResult<()> {
        sqlx::query(
            "UPDATE user_sessions SET revoked_at = NOW(), revoked_reason = $2 WHERE family_id = $1 AND revoked_at IS NULL",
        )
        .bind(family_id)
        .bind(reason)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn touch_session(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE user_sessions SET last_seen_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
